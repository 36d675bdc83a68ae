//! Binding table for the script functions.

use satchel_core::FormId;

use super::ScriptFunctions;
use crate::api::{ScriptType, ScriptValue};
use crate::registry::{FunctionRegistry, FunctionSignature};

use ScriptType::{Form, Int, IntArray};

/// Binds every script function into `registry`.
pub fn register_functions(registry: &mut FunctionRegistry) {
    tracing::info!("Binding script functions in {}...", registry.script());

    registry.bind(FunctionSignature::new("GetVersion", &[], IntArray), |functions, _| {
        functions.get_version().into()
    });
    registry.bind(
        FunctionSignature::new("GetFormActorOwner", &[Form, Form], Form),
        |functions, args| functions.get_form_actor_owner(form(args, 0), form(args, 1)).into(),
    );
    registry.bind(
        FunctionSignature::new("GetFormFactionOwner", &[Form, Form], Form),
        |functions, args| functions.get_form_faction_owner(form(args, 0), form(args, 1)).into(),
    );
    registry.bind(
        FunctionSignature::new("SetFormActorOwner", &[Form, Form, Form], ScriptType::Bool),
        |functions, args| {
            functions
                .set_form_actor_owner(form(args, 0), form(args, 1), form(args, 2))
                .into()
        },
    );
    registry.bind(
        FunctionSignature::new("SetFormFactionOwner", &[Form, Form, Form], ScriptType::Bool),
        |functions, args| {
            functions
                .set_form_faction_owner(form(args, 0), form(args, 1), form(args, 2))
                .into()
        },
    );
    registry.bind(
        FunctionSignature::new("IsFormStolen", &[Form, Form], ScriptType::Bool),
        |functions, args| functions.is_form_stolen(form(args, 0), form(args, 1)).into(),
    );
    registry.bind(
        FunctionSignature::new("GetTotalGoldValue", &[Form], Int),
        |functions, args| functions.get_total_gold_value(form(args, 0)).into(),
    );
    registry.bind(
        FunctionSignature::new("GetFormEnchantment", &[Form, Form], Form),
        |functions, args| functions.get_form_enchantment(form(args, 0), form(args, 1)).into(),
    );
    registry.bind(
        FunctionSignature::new("GetNumEnchantedFormsWithKeyword", &[Form, Form], Int),
        |functions, args| {
            functions
                .get_num_enchanted_forms_with_keyword(form(args, 0), form(args, 1))
                .into()
        },
    );
    registry.bind(
        FunctionSignature::new("AddFormWithOwner", &[Form, Form, Int, Form], ScriptType::Bool),
        |functions, args| {
            functions
                .add_form_with_owner(form(args, 0), form(args, 1), int(args, 2), form(args, 3))
                .into()
        },
    );
    registry.bind(
        FunctionSignature::new("IsFormStorable", &[Form], ScriptType::Bool),
        |functions, args| functions.is_form_storable(form(args, 0)).into(),
    );

    tracing::info!("Finished binding functions.");
}

fn form(args: &[ScriptValue], index: usize) -> Option<FormId> {
    args.get(index).and_then(ScriptValue::as_form)
}

fn int(args: &[ScriptValue], index: usize) -> i32 {
    args.get(index).and_then(ScriptValue::as_int).unwrap_or_default()
}
