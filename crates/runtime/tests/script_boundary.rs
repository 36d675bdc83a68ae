//! Script functions evaluated against the bundled data directory.

use std::path::PathBuf;
use std::sync::Arc;

use satchel_core::FormId;
use satchel_runtime::{
    Message, Plugin, RecordingDiagnostics, RuntimeConfig, RuntimeError, ScriptValue, Session,
    Severity, Version,
};

const STRONGBOX: FormId = FormId(0x0F1001);
const SATCHEL: FormId = FormId(0x000014);

const GOLD: FormId = FormId(0x00000F);
const LOCKPICK: FormId = FormId(0x00000A);
const IRON_SWORD: FormId = FormId(0x012EB7);
const STEEL_SWORD: FormId = FormId(0x013989);
const EMBER_SWORD: FormId = FormId(0x01398F);
const SILVER_RING: FormId = FormId(0x03B97C);

const FIRE_ENCHANTMENT: FormId = FormId(0x049BB7);
const SHOCK_ENCHANTMENT: FormId = FormId(0x045F9D);
const FIRE_KEYWORD: FormId = FormId(0x01CEAD);
const SHOCK_KEYWORD: FormId = FormId(0x01CEAF);

const BELETHOR: FormId = FormId(0x01A67B);
const THIEVES_GUILD: FormId = FormId(0x029DA9);
const COMPANIONS: FormId = FormId(0x048362);

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../game/content/data")
}

fn session() -> (Session, Arc<RecordingDiagnostics>) {
    let diagnostics = Arc::new(RecordingDiagnostics::new());
    let config = RuntimeConfig::default().with_data_dir(data_dir());
    let session = Plugin::load(config, diagnostics.clone()).expect("bundled data should load");
    (session, diagnostics)
}

#[test]
fn first_filled_slot_decides_owner_and_theft() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert_eq!(
        functions.get_form_faction_owner(Some(STRONGBOX), Some(SILVER_RING)),
        Some(THIEVES_GUILD)
    );
    // Belethor's later slot is never consulted.
    assert_eq!(functions.get_form_actor_owner(Some(STRONGBOX), Some(SILVER_RING)), None);
    assert!(functions.is_form_stolen(Some(STRONGBOX), Some(SILVER_RING)));

    // An existing but empty slot names nobody.
    assert_eq!(functions.get_form_actor_owner(Some(STRONGBOX), Some(STEEL_SWORD)), None);
    assert!(!functions.is_form_stolen(Some(STRONGBOX), Some(STEEL_SWORD)));

    // Lockpicks ignore their overrides.
    assert_eq!(functions.get_form_actor_owner(Some(STRONGBOX), Some(LOCKPICK)), None);
    assert!(!functions.is_form_stolen(Some(STRONGBOX), Some(LOCKPICK)));

    assert!(diagnostics.is_empty());
}

#[test]
fn absent_arguments_warn_and_return_neutral_values() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert!(!functions.is_form_stolen(None, Some(SILVER_RING)));
    assert_eq!(functions.get_form_enchantment(Some(SATCHEL), None), None);
    assert_eq!(functions.get_num_enchanted_forms_with_keyword(None, None), 0);
    assert_eq!(functions.get_total_gold_value(None), 0);

    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 4);
    assert!(entries.iter().all(|entry| entry.severity == Severity::Warning));
    assert_eq!(
        entries[0].message,
        "IsFormStolen passed with at least 1 NONE argument"
    );
    assert_eq!(entries[3].function, "GetTotalGoldValue");
}

#[test]
fn unknown_forms_and_containers_are_reported() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert_eq!(functions.get_form_enchantment(Some(FormId(0xDEAD)), Some(IRON_SWORD)), None);
    assert!(!functions.is_form_storable(Some(FormId(0xBEEF))));

    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, Severity::Warning);
    assert_eq!(entries[1].severity, Severity::Info);
}

#[test]
fn typed_setters_require_matching_owner_kind() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert!(!functions.set_form_actor_owner(Some(STRONGBOX), Some(SILVER_RING), Some(THIEVES_GUILD)));
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].function, "SetFormActorOwner");
    assert_eq!(
        entries[0].message,
        "form 0x00029DA9 cannot own items (container 0x000F1001, item 0x0003B97C)"
    );

    // Every existing slot is rewritten; the player belongs to the Companions.
    assert!(functions.set_form_faction_owner(Some(STRONGBOX), Some(SILVER_RING), Some(COMPANIONS)));
    assert_eq!(
        functions.get_form_faction_owner(Some(STRONGBOX), Some(SILVER_RING)),
        Some(COMPANIONS)
    );
    assert!(!functions.is_form_stolen(Some(STRONGBOX), Some(SILVER_RING)));

    // The empty slot on the steel sword is filled in place.
    assert!(functions.set_form_actor_owner(Some(STRONGBOX), Some(STEEL_SWORD), Some(BELETHOR)));
    assert_eq!(
        functions.get_form_actor_owner(Some(STRONGBOX), Some(STEEL_SWORD)),
        Some(BELETHOR)
    );
    assert!(functions.is_form_stolen(Some(STRONGBOX), Some(STEEL_SWORD)));

    // No slots on the iron sword: nothing to rewrite, no error either.
    assert!(!functions.set_form_actor_owner(Some(SATCHEL), Some(IRON_SWORD), Some(BELETHOR)));
    assert!(diagnostics.is_empty());
}

#[test]
fn enchantments_and_keyword_tally() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert_eq!(
        functions.get_form_enchantment(Some(SATCHEL), Some(EMBER_SWORD)),
        Some(FIRE_ENCHANTMENT)
    );
    assert_eq!(
        functions.get_form_enchantment(Some(SATCHEL), Some(IRON_SWORD)),
        Some(SHOCK_ENCHANTMENT)
    );
    assert_eq!(functions.get_form_enchantment(Some(STRONGBOX), Some(IRON_SWORD)), None);

    assert_eq!(functions.get_num_enchanted_forms_with_keyword(Some(SATCHEL), Some(SHOCK_KEYWORD)), 1);
    assert_eq!(functions.get_num_enchanted_forms_with_keyword(Some(SATCHEL), Some(FIRE_KEYWORD)), 2);
    assert_eq!(functions.get_num_enchanted_forms_with_keyword(Some(STRONGBOX), Some(FIRE_KEYWORD)), 0);
    assert!(diagnostics.is_empty());

    // Only keyword forms are tallied against.
    assert_eq!(functions.get_num_enchanted_forms_with_keyword(Some(SATCHEL), Some(IRON_SWORD)), 0);
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].function, "GetNumEnchantedFormsWithKeyword");
    assert_eq!(entries[0].severity, Severity::Info);
}

#[test]
fn insertion_respects_the_gate_and_owner_kind() {
    let (session, diagnostics) = session();
    let functions = session.functions();

    assert!(!functions.add_form_with_owner(Some(SATCHEL), Some(GOLD), 10, None));
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Info);

    assert!(!functions.add_form_with_owner(Some(SATCHEL), Some(SILVER_RING), 0, None));
    assert_eq!(diagnostics.drain()[0].severity, Severity::Warning);

    // A non-owner form is dropped with a warning; the stack still lands.
    assert!(functions.add_form_with_owner(Some(SATCHEL), Some(SILVER_RING), 2, Some(IRON_SWORD)));
    let entries = diagnostics.drain();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].function, "AddFormWithOwner");
    assert!(entries[0].message.contains("container 0x00000014"));
    assert!(entries[0].message.contains("item 0x0003B97C"));
    assert_eq!(functions.get_form_actor_owner(Some(SATCHEL), Some(SILVER_RING)), None);

    assert!(functions.add_form_with_owner(Some(SATCHEL), Some(IRON_SWORD), 1, Some(BELETHOR)));
    assert_eq!(
        functions.get_form_actor_owner(Some(SATCHEL), Some(IRON_SWORD)),
        Some(BELETHOR)
    );
    assert!(functions.is_form_stolen(Some(SATCHEL), Some(IRON_SWORD)));
    assert!(diagnostics.is_empty());
}

#[test]
fn storability_and_value() {
    let (session, _) = session();
    let functions = session.functions();

    assert!(functions.is_form_storable(Some(IRON_SWORD)));
    assert!(!functions.is_form_storable(Some(GOLD)));
    assert!(!functions.is_form_storable(Some(FormId(0x0DE8F5))));
    assert!(functions.is_form_storable(Some(FormId(0x01D4EC))));

    assert_eq!(functions.get_total_gold_value(Some(IRON_SWORD)), 25);
}

#[test]
fn registry_dispatches_and_validates() {
    let (session, diagnostics) = session();

    assert_eq!(session.registry().script(), "SatchelExtensions");
    assert_eq!(session.registry().len(), 11);

    assert_eq!(
        session.call("getversion", &[]).unwrap(),
        ScriptValue::IntArray(Version::current().as_array().to_vec())
    );
    assert_eq!(
        session
            .call("GetTotalGoldValue", &[ScriptValue::Form(IRON_SWORD)])
            .unwrap(),
        ScriptValue::Int(25)
    );
    assert_eq!(
        session
            .call(
                "GetFormFactionOwner",
                &[ScriptValue::Form(STRONGBOX), ScriptValue::Form(SILVER_RING)]
            )
            .unwrap(),
        ScriptValue::Form(THIEVES_GUILD)
    );
    assert!(diagnostics.is_empty());

    // Null forms pass type checks and reach the function's own validation.
    assert_eq!(
        session.call("IsFormStolen", &[ScriptValue::None, ScriptValue::None]).unwrap(),
        ScriptValue::Bool(false)
    );
    assert_eq!(diagnostics.drain().len(), 1);

    assert!(matches!(
        session.call("IsFormStolen", &[ScriptValue::Form(STRONGBOX)]),
        Err(RuntimeError::Arity { expected: 2, provided: 1, .. })
    ));
    assert!(matches!(
        session.call("GetTotalGoldValue", &[ScriptValue::Int(3)]),
        Err(RuntimeError::ArgumentType { index: 0, .. })
    ));
    assert_eq!(diagnostics.drain().len(), 2);

    assert!(matches!(
        session.call("OpenInventoryEx", &[]),
        Err(RuntimeError::UnknownFunction { .. })
    ));
    assert!(diagnostics.is_empty());
}

#[test]
fn data_loaded_reads_settings_and_mod_objects() {
    let (mut session, _) = session();
    assert!(session.mod_objects().is_none());
    assert!(session.settings_report().is_none());

    session.on_message(Message::PostLoad).unwrap();
    assert!(session.mod_objects().is_none());

    session.on_message(Message::DataLoaded).unwrap();
    let report = session.settings_report().expect("settings were read");
    assert_eq!(report.accepted.len(), 1);
    assert_eq!(report.skipped.len(), 1);

    let mod_objects = session.mod_objects().expect("mod objects were preloaded");
    assert_eq!(mod_objects.get("FenceLedger").unwrap(), FormId(0x01000D62));
}

#[test]
fn missing_data_dir_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = RuntimeConfig::default().with_data_dir(dir.path());
    let result = Plugin::load(config, Arc::new(RecordingDiagnostics::new()));
    assert!(matches!(result, Err(RuntimeError::Content(_))));
}

#[test]
fn theft_follows_identity_changes() {
    let (session, _) = session();
    let functions = session.functions();
    assert!(functions.is_form_stolen(Some(STRONGBOX), Some(SILVER_RING)));

    functions.oracles().identity().join_faction(THIEVES_GUILD);
    assert!(!functions.is_form_stolen(Some(STRONGBOX), Some(SILVER_RING)));

    // Replacing the identity drops the membership again.
    functions
        .oracles()
        .identity()
        .set(satchel_core::ActingIdentity::new(BELETHOR));
    assert!(functions.is_form_stolen(Some(STRONGBOX), Some(SILVER_RING)));
}
