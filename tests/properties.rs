use glam::DVec2;
use proptest::prelude::*;
use symbios_turtle2d::{interpret, presets, Alphabet, LSystem, LSystemError, Segment};

fn alphabet() -> Alphabet {
    Alphabet::new([
        ('F', "L10"),
        ('G', "L3"),
        ('+', "R+30"),
        ('-', "R-45"),
        ('X', "0"),
        ('Y', "0"),
    ])
    .unwrap()
}

fn symbol_string(max: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::sample::select(vec!['F', 'G', '+', '-', 'X', 'Y', 'Z']), 1..max)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    /// Rewriting k then k more generations matches 2k from the axiom.
    #[test]
    fn rewrites_compose(axiom in symbol_string(6), rule in symbol_string(5), k in 0usize..3) {
        let rules = [('F', rule.clone()), ('X', format!("{rule}X"))];
        let mut split = LSystem::new(alphabet(), axiom.clone(), rules.clone()).unwrap();
        split.iterate(k);
        split.iterate(k);

        let mut whole = LSystem::new(alphabet(), axiom, rules).unwrap();
        whole.iterate(2 * k);

        prop_assert_eq!(split.current(), whole.current());
        prop_assert_eq!(split.generation(), whole.generation());
    }

    /// Interpreting the same input twice gives bit-identical output.
    #[test]
    fn interpretation_is_deterministic(symbols in symbol_string(64), heading in -720i64..720) {
        let a = interpret(&alphabet(), &symbols, DVec2::new(1.5, -2.0), heading).unwrap();
        let b = interpret(&alphabet(), &symbols, DVec2::new(1.5, -2.0), heading).unwrap();
        prop_assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            prop_assert_eq!(x.from.x.to_bits(), y.from.x.to_bits());
            prop_assert_eq!(x.from.y.to_bits(), y.from.y.to_bits());
            prop_assert_eq!(x.to.x.to_bits(), y.to.x.to_bits());
            prop_assert_eq!(x.to.y.to_bits(), y.to.y.to_bits());
        }
    }

    /// Removing placeholder symbols never changes what gets drawn.
    #[test]
    fn compaction_preserves_segments(symbols in symbol_string(64)) {
        let mut system = LSystem::new(alphabet(), symbols.clone(), Vec::<(char, &str)>::new()).unwrap();
        let before = system.interpret().unwrap();
        let report = system.compact();
        prop_assert_eq!(system.interpret().unwrap(), before);
        prop_assert!(!system.current().contains(['X', 'Y']));
        prop_assert_eq!(report.before, symbols.len());
    }

    /// Properly nested branches always end with an empty stack.
    #[test]
    fn balanced_branches_close(depths in proptest::collection::vec(0usize..4, 1..8)) {
        let alphabet = Alphabet::new([('F', "L10"), ('+', "R+20"), ('[', "P"), (']', "p")]).unwrap();
        let mut symbols = String::new();
        for depth in depths {
            symbols.push_str(&"[F+".repeat(depth));
            symbols.push('F');
            symbols.push_str(&"]".repeat(depth));
        }
        let summary = symbios_turtle2d::TurtleInterpreter::default()
            .run(&alphabet, &symbols, &mut Vec::<Segment>::new())
            .unwrap();
        prop_assert_eq!(summary.open_branches, 0);
    }

    /// Any pop ahead of its push underflows.
    #[test]
    fn leading_pop_underflows(prefix in "[F+]{0,8}") {
        let alphabet = Alphabet::new([('F', "L10"), ('+', "R+20"), ('[', "P"), (']', "p")]).unwrap();
        let symbols = format!("{prefix}]");
        let err = interpret(&alphabet, &symbols, DVec2::ZERO, 90).unwrap_err();
        prop_assert_eq!(err, LSystemError::StackUnderflow { index: prefix.len(), symbol: ']' });
    }
}

#[test]
fn koch_segment_count_grows_fivefold() {
    let mut koch = presets::koch_curve().unwrap();
    for generation in 1..=4u32 {
        koch.rewrite_once();
        assert_eq!(koch.interpret().unwrap().len(), 5usize.pow(generation));
    }
}
