// corretor-core/tests/engine_properties_tests.rs
//! Behavioural properties of a full correction pass, driven through the public API.

use anyhow::Result;
use corretor_core::{
    ChangeRecord, CorrectionEngine, MemoryRuleStore, NewRule, Rule, RuleEngine, RuleStore,
};

fn engine_for(pairs: &[(&str, &str)]) -> Result<RuleEngine> {
    let store = MemoryRuleStore::with_rules(pairs.iter().map(|(w, r)| NewRule::new(*w, *r)))?;
    Ok(RuleEngine::new(store.list_rules()?))
}

fn changes(pairs: &[(&str, &str)]) -> Vec<ChangeRecord> {
    pairs.iter().map(|(d, p)| ChangeRecord::new(*d, *p)).collect()
}

#[test_log::test]
fn test_determinism() -> Result<()> {
    let engine = engine_for(&[("vai", "vou"), ("nós vai", "nós vamos"), ("foi", "foram")])?;
    let input = "Nós vai e eles foi. VAI logo!";
    let first = engine.correct(input);
    for _ in 0..5 {
        assert_eq!(engine.correct(input), first);
    }
    Ok(())
}

#[test]
fn test_idempotent_once_nothing_matches() -> Result<()> {
    let engine = engine_for(&[("vai", "vamos"), ("foi", "foram")])?;
    let once = engine.correct("nós vai e eles foi");
    let twice = engine.correct(&once.corrected_text);
    assert_eq!(twice.corrected_text, once.corrected_text);
    assert!(twice.changes.is_empty());
    Ok(())
}

#[test]
fn test_no_rules_is_identity() {
    let engine = RuleEngine::new(Vec::<Rule>::new());
    for text in ["", "nós vai", "  espaços  ", "ÇÃO\nlinha"] {
        let result = engine.correct(text);
        assert_eq!(result.corrected_text, text);
        assert!(result.changes.is_empty());
    }
}

#[test]
fn test_word_boundary_respect() -> Result<()> {
    let engine = engine_for(&[("vai", "vou")])?;
    assert_eq!(engine.correct("levaivinda").corrected_text, "levaivinda");
    assert_eq!(engine.correct("ele vai embora").corrected_text, "ele vou embora");
    Ok(())
}

#[test]
fn test_longer_rule_first() -> Result<()> {
    let engine = engine_for(&[("vai", "vou"), ("nós vai", "nós vamos")])?;
    let result = engine.correct("nós vai");
    assert_eq!(result.corrected_text, "nós vamos");
    assert_eq!(result.changes, changes(&[("nós vai", "nós vamos")]));
    Ok(())
}

#[test]
fn test_longer_rule_first_regardless_of_creation_order() -> Result<()> {
    let engine = engine_for(&[("nós vai", "nós vamos"), ("vai", "vou")])?;
    assert_eq!(engine.correct("nós vai").corrected_text, "nós vamos");
    Ok(())
}

#[test]
fn test_case_preservation() -> Result<()> {
    let engine = engine_for(&[("vai", "vou")])?;
    assert_eq!(engine.correct("VAI").corrected_text, "VOU");
    assert_eq!(engine.correct("Vai").corrected_text, "Vou");
    assert_eq!(engine.correct("vai").corrected_text, "vou");
    assert_eq!(engine.correct("vAi").corrected_text, "vou");
    Ok(())
}

#[test]
fn test_change_records_in_left_to_right_rule_order() -> Result<()> {
    // "foi" is newer than "vai" and equally long, so it runs first.
    let engine = engine_for(&[("vai", "vamos"), ("foi", "foram")])?;
    let result = engine.correct("nós vai e eles foi");
    assert_eq!(result.corrected_text, "nós vamos e eles foram");
    assert_eq!(result.changes.len(), 2);
    assert!(result.changes.contains(&ChangeRecord::new("vai", "vamos")));
    assert!(result.changes.contains(&ChangeRecord::new("foi", "foram")));

    // Same rules, created in the opposite order: records follow rule order.
    let engine = engine_for(&[("foi", "foram"), ("vai", "vamos")])?;
    let result = engine.correct("nós vai e eles foi");
    assert_eq!(result.changes, changes(&[("vai", "vamos"), ("foi", "foram")]));
    Ok(())
}

#[test]
fn test_phrase_rules_absorb_word_matches() -> Result<()> {
    let engine = engine_for(&[
        ("vai", "vamos"),
        ("foi", "foram"),
        ("nós vai", "nós vamos"),
        ("eles foi", "eles foram"),
    ])?;
    let result = engine.correct("nós vai e eles foi");
    assert_eq!(result.corrected_text, "nós vamos e eles foram");
    assert_eq!(
        result.changes,
        changes(&[("eles foi", "eles foram"), ("nós vai", "nós vamos")])
    );
    Ok(())
}

#[test]
fn test_unmatched_text_passthrough() -> Result<()> {
    let engine = engine_for(&[("vai", "vou")])?;
    let input = "  Olá,\tmundo!\r\n  ele vai — com acentos: ção, ü, 😀  ";
    let result = engine.correct(input);
    assert_eq!(
        result.corrected_text,
        "  Olá,\tmundo!\r\n  ele vou — com acentos: ção, ü, 😀  "
    );
    Ok(())
}

#[test]
fn test_phrase_whitespace_must_match_exactly() -> Result<()> {
    let engine = engine_for(&[("nós vai", "nós vamos")])?;
    assert_eq!(engine.correct("nós  vai").corrected_text, "nós  vai");
    assert_eq!(engine.correct("nós\nvai").corrected_text, "nós\nvai");
    Ok(())
}

#[test]
fn test_punctuation_in_rule_is_literal() -> Result<()> {
    let engine = engine_for(&[("a gente vamos?", "a gente vai?")])?;
    let result = engine.correct("E aí, a gente vamos? Sim.");
    assert_eq!(result.corrected_text, "E aí, a gente vai? Sim.");
    Ok(())
}
