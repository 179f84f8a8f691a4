use pretty_assertions::assert_eq;

use super::*;

fn table() -> &'static DecisionTable {
    DecisionTable::standard()
}

fn intersects(a: TokenSet, b: TokenSet) -> bool {
    a.iter().any(|kind| b.contains(kind))
}

#[test]
fn test_decision_indices_are_dense() {
    for (i, decision) in Decision::ALL.iter().enumerate() {
        assert_eq!(*decision as usize, i);
    }
}

#[test]
fn test_descend_only_on_first_of_target() {
    for decision in Decision::ALL {
        for kind in TokenKind::ALL {
            if let Action::Descend(rule) = table().action(decision, kind) {
                assert!(
                    first(rule).contains(kind),
                    "{decision:?} descends into {rule} on {kind:?}"
                );
            }
        }
    }
}

#[test]
fn test_match_consumes_the_lookahead() {
    for decision in Decision::ALL {
        for kind in TokenKind::ALL {
            if let Action::Match(matched) = table().action(decision, kind) {
                assert_eq!(matched, kind, "{decision:?}");
            }
        }
    }
}

#[test]
fn test_repetitions_take_body_on_first_and_leave_on_follow() {
    let cases = [
        (Decision::GlobalVars, GrammarRule::VarDecl, GrammarRule::GlobalVars),
        (Decision::LocalVars, GrammarRule::VarDecl, GrammarRule::LocalVars),
        (Decision::Functions, GrammarRule::FunctionDecls, GrammarRule::Functions),
        (Decision::BlockStatements, GrammarRule::Statement, GrammarRule::Statement),
        (Decision::ParamListOpt, GrammarRule::ParamList, GrammarRule::ParamList),
    ];
    for (decision, body, enclosing) in cases {
        assert_eq!(table().expected(decision), first(body), "{decision:?}");
        for kind in follow(enclosing).iter() {
            if first(body).contains(kind) {
                continue;
            }
            assert_eq!(
                table().action(decision, kind),
                Action::Epsilon,
                "{decision:?} on {kind:?}"
            );
        }
    }
}

#[test]
fn test_grammar_is_ll1_at_nullable_rules() {
    for rule in GrammarRule::ALL {
        if nullable(rule) {
            assert!(
                !intersects(first(rule), follow(rule)),
                "FIRST/FOLLOW conflict in {rule}"
            );
        }
    }
}

#[test]
fn test_third_dimension_is_rejected() {
    assert_eq!(
        table().action(Decision::ExtraDim, TokenKind::LBracket),
        Action::Reject
    );
    assert_eq!(
        table().action(Decision::ExtraDim, TokenKind::Ident),
        Action::Epsilon
    );
}

#[test]
fn test_basic_type_row() {
    assert_eq!(
        table().expected(Decision::BasicType),
        first(GrammarRule::BasicType)
    );
    assert_eq!(
        table().accepted(Decision::BasicType),
        first(GrammarRule::BasicType)
    );
}

#[test]
fn test_decision_rules() {
    assert_eq!(Decision::ExtraDim.rule(), GrammarRule::Type);
    assert_eq!(Decision::ParamListOpt.rule(), GrammarRule::FunctionDecls);
}

#[test]
fn test_table_is_shared() {
    assert!(std::ptr::eq(DecisionTable::standard(), DecisionTable::standard()));
}
