// corretor-core/tests/json_store_tests.rs
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

use corretor_core::{
    export_rules, headless_correct, import_rules, CorretorError, JsonRuleStore, NewRule, RuleSeed,
    RuleStore,
};

fn temp_store() -> Result<(TempDir, JsonRuleStore)> {
    let dir = tempfile::tempdir()?;
    let store = JsonRuleStore::new(dir.path().join("regras.json"));
    Ok((dir, store))
}

#[test]
fn test_missing_file_is_empty_store() -> Result<()> {
    let (_dir, store) = temp_store()?;
    assert!(store.list_rules()?.is_empty());
    assert!(!store.path().exists());
    Ok(())
}

#[test]
fn test_empty_file_is_empty_store() -> Result<()> {
    let (_dir, store) = temp_store()?;
    fs::write(store.path(), "")?;
    assert!(store.list_rules()?.is_empty());
    Ok(())
}

#[test_log::test]
fn test_rules_persist_across_instances() -> Result<()> {
    let (dir, mut store) = temp_store()?;
    store.add_rule(NewRule::new(" vai ", "vou").with_notes("presente"))?;
    store.add_rule(NewRule::new("nós vai", "nós vamos"))?;

    let reopened = JsonRuleStore::new(dir.path().join("regras.json"));
    let rules = reopened.list_rules()?;
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].wrong, "nós vai");
    assert_eq!(rules[1].wrong, "vai");
    assert_eq!(rules[1].notes, "presente");
    Ok(())
}

#[test]
fn test_creates_parent_directories() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = JsonRuleStore::new(dir.path().join("nested").join("deep").join("regras.json"));
    store.add_rule(NewRule::new("vai", "vou"))?;
    assert!(store.path().exists());
    Ok(())
}

#[test]
fn test_no_temp_file_left_behind() -> Result<()> {
    let (dir, mut store) = temp_store()?;
    store.add_rule(NewRule::new("vai", "vou"))?;
    let leftovers: Vec<_> = fs::read_dir(dir.path())?
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
    Ok(())
}

#[test]
fn test_delete_and_clear() -> Result<()> {
    let (_dir, mut store) = temp_store()?;
    let a = store.add_rule(NewRule::new("vai", "vou"))?;
    store.add_rule(NewRule::new("foi", "foram"))?;

    assert!(store.delete_rule(a.id)?);
    assert!(!store.delete_rule(a.id)?);
    assert_eq!(store.list_rules()?.len(), 1);

    assert_eq!(store.clear_rules()?, 1);
    assert!(store.list_rules()?.is_empty());

    let next = store.add_rule(NewRule::new("vai", "vou"))?;
    assert!(next.id > a.id + 1);
    Ok(())
}

#[test]
fn test_invalid_rule_is_not_persisted() -> Result<()> {
    let (_dir, mut store) = temp_store()?;
    let err = store.add_rule(NewRule::new("vai", "  ")).unwrap_err();
    assert!(matches!(err, CorretorError::InvalidRule(_)));
    assert!(store.list_rules()?.is_empty());
    Ok(())
}

#[test]
fn test_corrupt_file_reports_store_error() -> Result<()> {
    let (_dir, store) = temp_store()?;
    fs::write(store.path(), "{ definitely not json")?;
    assert!(matches!(store.list_rules(), Err(CorretorError::StoreError(_))));
    Ok(())
}

#[test]
fn test_backup_round_trip_between_files() -> Result<()> {
    let (_a, mut source) = temp_store()?;
    source.add_rule(NewRule::new("eles foi", "eles foram"))?;
    source.add_rule(NewRule::new("vai", "vou"))?;

    let json = export_rules(&source)?.to_pretty_json()?;

    let (_b, mut target) = temp_store()?;
    target.add_rule(NewRule::new("velha", "regra"))?;
    let report = import_rules(&mut target, &json, true)?;
    assert_eq!(report.imported, 2);
    assert_eq!(report.replaced, 1);

    let result = headless_correct(&target, "Eles foi e ele vai")?;
    assert_eq!(result.corrected_text, "Eles foram e ele vou");
    Ok(())
}

#[test]
fn test_seed_file_into_json_store() -> Result<()> {
    let (dir, mut store) = temp_store()?;
    let seed_path = dir.path().join("seed.yaml");
    fs::write(
        &seed_path,
        "rules:\n  - wrong: a gente vamos\n    right: a gente vai\n    notes: concordância\n",
    )?;

    let seed = RuleSeed::load_from_file(&seed_path)?;
    assert_eq!(seed.apply(&mut store)?, 1);
    assert_eq!(store.list_rules()?[0].notes, "concordância");
    Ok(())
}
