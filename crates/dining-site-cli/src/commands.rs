//! `preview` and `submit`: the page-load and form flows run against a live API.

use dining_site::{
    default_page, ContentLoader, FetchError, Form, FormKind, FormSubmitter, HttpTransport,
    MemoryPage, SubmissionResult,
};

use crate::error::{CliError, CliResult};

/// What a page load produced.
#[derive(Debug)]
pub struct Preview {
    pub page: MemoryPage,
    /// Why content could not be applied, when it could not.
    pub load_error: Option<FetchError>,
    /// Forms that would be wired on this page.
    pub forms: Vec<FormKind>,
}

/// Load `/api/content` onto the default page layout.
///
/// A failed load is not an error here: the page keeps its static copy, as a
/// visitor would see it.
pub async fn preview(api_base: &str) -> CliResult<Preview> {
    let transport = HttpTransport::new(api_base)?;
    let loader = ContentLoader::new(transport);

    let mut page = default_page();
    let load_error = loader.load_content(&mut page).await.err();
    let forms = FormKind::present_on(&page);

    Ok(Preview {
        page,
        load_error,
        forms,
    })
}

/// What a form submission left on the page.
#[derive(Debug)]
pub struct Submitted {
    pub page: MemoryPage,
    pub form: Form,
    pub result: SubmissionResult<String>,
}

/// Submit `fields` as the `kind` form.
pub async fn submit(
    api_base: &str,
    kind: FormKind,
    fields: &[(String, String)],
) -> CliResult<Submitted> {
    let transport = HttpTransport::new(api_base)?;
    let submitter = FormSubmitter::new(transport);

    let mut page = default_page();
    let mut form = Form::new();
    for (name, value) in fields {
        form.push(name, value);
    }

    tracing::info!(form = %kind, fields = fields.len(), "submitting");
    let result = submitter
        .submit_form(&mut form, kind.endpoint(), kind.feedback_id(), &mut page)
        .await;

    Ok(Submitted { page, form, result })
}

/// Parse a `name=value` command-line field.
pub fn parse_field(raw: &str) -> CliResult<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(CliError::InvalidField(raw.to_string())),
    }
}
