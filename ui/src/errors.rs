use moodshop_core::ShopError;
use thiserror::Error;

/// Errors raised inside a flow before they are reported to the user.
#[derive(Error, Debug)]
pub enum UiError {
    #[error(transparent)]
    Api(#[from] ShopError),

    #[error("Template Error: {0}")]
    Template(#[from] minijinja::Error),
}

pub type UiResult<T> = Result<T, UiError>;
