use thiserror::Error;

/// Markup that does not follow the catalog conventions.
///
/// These are configuration problems in the page, not user errors. The web
/// layer logs them and skips the offending element.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("checkbox `{service}` is not inside a services panel")]
    CheckboxOutsidePanel { service: String },
    #[error("panel id `{element_id}` does not start with `panel-`")]
    MalformedPanelId { element_id: String },
    #[error("panel `{category_id}` has no category label")]
    MissingLabel { category_id: String },
    #[error("checkbox inside panel `{category_id}` has an empty value")]
    EmptyServiceName { category_id: String },
}
