//! `php.ini` rendering
//!
//! Templates use Tera expression syntax: `{{ PSHDir }}` is replaced by the
//! value bound to `PSHDir`. Autoescaping is off, so Windows paths and quotes
//! come through verbatim. An unbound variable is a render error.

use std::collections::HashMap;
use std::error::Error as _;
use tera::{Context, Tera};
use thiserror::Error;

/// Errors raised while parsing or rendering a template
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template {template} does not parse: {}", chain(.source))]
    Parse {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("template {template} does not render: {}", chain(.source))]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },
}

/// Flatten a Tera error and its causes into one line
fn chain(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// A parsed template, ready to render
#[derive(Debug)]
pub struct Template {
    name: String,
    tera: Tera,
}

impl Template {
    /// Parse template source registered under `name`
    pub fn parse(name: &str, source: &str) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|source| TemplateError::Parse {
                template: name.to_string(),
                source,
            })?;

        Ok(Self {
            name: name.to_string(),
            tera,
        })
    }

    /// Render with the given variable values
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        let mut context = Context::new();
        for (key, value) in values {
            context.insert(*key, value);
        }

        self.tera
            .render(&self.name, &context)
            .map_err(|source| TemplateError::Render {
                template: self.name.clone(),
                source,
            })
    }
}
