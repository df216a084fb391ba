use crate::builtins::info_panel_base;
use crate::evaluator::EvalResult;
use crate::props::Props;
use crate::registry::names;
use crate::vdom::VNode;

/// Info panel without contact, license or terms (those live in the footer)
pub fn info_panel(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    info_panel_base(props, true).map(Some)
}

/// Info panel for OpenAPI 3.1 documents: adds the JSON Schema dialect
pub fn oas31_info_panel(props: &Props<'_>) -> EvalResult<Option<VNode>> {
    let panel = info_panel_base(props, true)?;
    let dialect = props.render(names::JSON_SCHEMA_DIALECT, false)?;
    Ok(Some(panel.with_optional_child(dialect)))
}
