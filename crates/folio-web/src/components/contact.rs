//! Asynchronous contact form submission and field feedback.

use std::rc::Rc;

use folio_core::contact::blur_indicator;
use folio_core::{
    ButtonState, ContactForm, FolioConfig, FolioError, FolioResult, FormSurface, FormTransport,
    Submission, TransportResponse,
};
use gloo::events::{EventListener, EventListenerOptions};
use gloo::net::http::Request;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement,
    HtmlInputElement, HtmlTextAreaElement,
};

use crate::dom;
use crate::selectors::{CONTACT_FORM, FORM_FIELD, SUBMIT_BUTTON};

/// POSTs submissions with `fetch`, asking for a JSON answer.
///
/// Bound to a page form, the body is that form's own `FormData`, so file
/// inputs are sent as selected. Unbound, the body is rebuilt from the
/// submission's string fields.
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    form: Option<HtmlFormElement>,
}

impl FetchTransport {
    pub fn for_form(form: HtmlFormElement) -> Self {
        Self { form: Some(form) }
    }

    /// Request body for `submission`.
    pub fn body(&self, submission: &Submission) -> FolioResult<FormData> {
        if let Some(form) = &self.form {
            return FormData::new_with_form(form).map_err(dom::js_error);
        }
        let body = FormData::new().map_err(dom::js_error)?;
        for (name, value) in &submission.fields {
            body.append_with_str(name, value).map_err(dom::js_error)?;
        }
        Ok(body)
    }
}

impl FormTransport for FetchTransport {
    async fn post(&self, submission: &Submission) -> FolioResult<TransportResponse> {
        let response = Request::post(&submission.action)
            .header("Accept", "application/json")
            .body(self.body(submission)?)
            .map_err(|e| FolioError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FolioError::Network(e.to_string()))?;

        Ok(TransportResponse {
            status: response.status(),
            ok: response.ok(),
        })
    }
}

/// The page's contact form and its submit button.
struct PageForm {
    form: HtmlFormElement,
    button: Option<HtmlButtonElement>,
    original_label: String,
}

impl FormSurface for PageForm {
    fn action(&self) -> String {
        self.form.action()
    }

    fn fields(&self) -> Vec<(String, String)> {
        let Ok(data) = FormData::new_with_form(&self.form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = js_sys::Array::from(&entry);
                // Files are not strings; FetchTransport sends them from the form itself
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn set_button(&self, state: ButtonState) {
        let Some(button) = &self.button else {
            return;
        };
        button.set_inner_html(state.markup().unwrap_or(self.original_label.as_str()));
        dom::set_style(button, "background", state.background().unwrap_or_default());
        button.set_disabled(state.is_disabled());
    }

    fn reset_fields(&self) {
        self.form.reset();
    }
}

pub fn mount(document: &Document, config: &FolioConfig) -> FolioResult<()> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, CONTACT_FORM) else {
        tracing::debug!("no contact form on page");
        return Ok(());
    };

    let button = form
        .query_selector(SUBMIT_BUTTON)
        .map_err(dom::js_error)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let original_label = button.as_ref().map(|b| b.inner_html()).unwrap_or_default();

    let surface = Rc::new(PageForm {
        form: form.clone(),
        button,
        original_label,
    });
    let controller = Rc::new(ContactForm::new(FetchTransport::for_form(form.clone())));
    let reset_after = dom::millis(config.timings.form_reset());

    EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();

            // The restore clock runs from submission, not from the response
            {
                let surface = Rc::clone(&surface);
                let controller = Rc::clone(&controller);
                Timeout::new(reset_after, move || controller.restore(surface.as_ref())).forget();
            }

            let surface = Rc::clone(&surface);
            let controller = Rc::clone(&controller);
            spawn_local(async move {
                controller.submit(surface.as_ref()).await;
            });
        },
    )
    .forget();

    watch_fields(&form)?;

    tracing::debug!("contact form mounted");
    Ok(())
}

/// Border feedback on blur, cleared on input.
fn watch_fields(form: &HtmlFormElement) -> FolioResult<()> {
    for field in dom::query_all_in::<HtmlElement>(form, FORM_FIELD)? {
        let on_blur = field.clone();
        EventListener::new(&field, "blur", move |_event| {
            let Some((value, valid)) = field_state(&on_blur) else {
                return;
            };
            if let Some(indicator) = blur_indicator(&value, valid) {
                dom::set_style(&on_blur, "border-color", indicator.border_color());
            }
        })
        .forget();

        let on_input = field.clone();
        EventListener::new(&field, "input", move |_event| {
            dom::set_style(&on_input, "border-color", "");
        })
        .forget();
    }
    Ok(())
}

/// Current value and constraint validity of an input or textarea.
fn field_state(field: &Element) -> Option<(String, bool)> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        Some((input.value(), input.check_validity()))
    } else {
        field
            .dyn_ref::<HtmlTextAreaElement>()
            .map(|area| (area.value(), area.check_validity()))
    }
}
