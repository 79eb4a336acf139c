use std::env;

use indexmap::IndexMap;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};

use crate::error::{Error, Result};
use crate::template_filters::*;
use crate::template_variables::ProjectName;

pub fn create_liquid_engine() -> Result<Parser> {
    ParserBuilder::with_stdlib()
        .filter(KebabCaseFilterParser)
        .filter(PascalCaseFilterParser)
        .filter(ShoutySnakeCaseFilterParser)
        .filter(SnakeCaseFilterParser)
        .filter(TitleCaseFilterParser)
        .build()
        .map_err(Error::Engine)
}

/// create liquid object for the templates, pre-filled with all known variables
pub fn create_liquid_object(
    name: &ProjectName,
    author: &str,
    values: &IndexMap<String, toml::Value>,
) -> Result<Object> {
    let os_arch = format!("{}-{}", env::consts::OS, env::consts::ARCH);

    let mut liquid_object = Object::new();
    liquid_object.insert(
        "project-name".into(),
        Value::Scalar(name.as_str().to_owned().into()),
    );
    liquid_object.insert("module_name".into(), Value::Scalar(name.module_name().into()));
    liquid_object.insert("author".into(), Value::Scalar(author.to_owned().into()));
    liquid_object.insert("os-arch".into(), Value::Scalar(os_arch.into()));

    add_provided_values(&mut liquid_object, values)?;
    Ok(liquid_object)
}

/// Copy user supplied values into the liquid object. The builtin variables
/// above are never shadowed.
fn add_provided_values(
    liquid_object: &mut Object,
    values: &IndexMap<String, toml::Value>,
) -> Result<()> {
    values.iter().try_for_each(|(k, v)| {
        if liquid_object.contains_key(k.as_str()) {
            return Ok(());
        }
        let value = match v {
            toml::Value::String(content) => Value::Scalar(content.clone().into()),
            toml::Value::Boolean(content) => Value::Scalar((*content).into()),
            _ => return Err(Error::UnsupportedValue(k.clone())),
        };
        liquid_object.insert(k.clone().into(), value);
        Ok(())
    })
}

/// Render `content`; `label` names the template in errors.
pub fn render_string(
    parser: &Parser,
    globals: &Object,
    content: &str,
    label: &str,
) -> Result<String> {
    let wrap = |source| Error::Template {
        path: label.to_owned(),
        source,
    };
    let template = parser.parse(content).map_err(wrap)?;
    template.render(globals).map_err(wrap)
}
