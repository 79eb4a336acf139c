//! Case conversion filters, e.g. `{{ project-name | pascal_case }}`.

use heck::{ToKebabCase, ToPascalCase, ToShoutySnakeCase, ToSnakeCase, ToTitleCase};
use liquid_core::{Filter, Result, Runtime, Value, ValueView};
use liquid_derive::{Display_filter, FilterReflection, ParseFilter};

macro_rules! case_filter {
    ($parser:ident, $filter:ident, $name:literal, $description:literal, $convert:ident) => {
        #[derive(Clone, ParseFilter, FilterReflection)]
        #[filter(name = $name, description = $description, parsed($filter))]
        pub struct $parser;

        #[derive(Debug, Default, Display_filter)]
        #[name = $name]
        struct $filter;

        impl Filter for $filter {
            fn evaluate(&self, input: &dyn ValueView, _runtime: &dyn Runtime) -> Result<Value> {
                let input = input.to_kstr();
                Ok(Value::scalar(input.as_str().$convert()))
            }
        }
    };
}

case_filter!(
    KebabCaseFilterParser,
    KebabCaseFilter,
    "kebab_case",
    "Change text to kebab-case.",
    to_kebab_case
);
case_filter!(
    SnakeCaseFilterParser,
    SnakeCaseFilter,
    "snake_case",
    "Change text to snake_case.",
    to_snake_case
);
case_filter!(
    PascalCaseFilterParser,
    PascalCaseFilter,
    "pascal_case",
    "Change text to PascalCase.",
    to_pascal_case
);
case_filter!(
    TitleCaseFilterParser,
    TitleCaseFilter,
    "title_case",
    "Change text to Title Case.",
    to_title_case
);
case_filter!(
    ShoutySnakeCaseFilterParser,
    ShoutySnakeCaseFilter,
    "shouty_snake_case",
    "Change text to SHOUTY_SNAKE_CASE.",
    to_shouty_snake_case
);
