//! Ready-made grammars for the classic curves and plants.
//!
//! Every preset draws with a step length of 10 and starts at generation 0.

use crate::alphabet::Alphabet;
use crate::error::Result;
use crate::grammar::LSystem;

/// Binary tree. `[` and `]` both branch and turn by 45°.
pub fn binary_tree() -> Result<LSystem> {
    let alphabet = Alphabet::new([
        ('0', "L10"),
        ('1', "L10"),
        ('[', "P R+045"),
        (']', "p R-045"),
    ])?;
    LSystem::new(alphabet, "0", [('1', "11"), ('0', "1[0]0")])
}

/// Quadratic Koch curve.
pub fn koch_curve() -> Result<LSystem> {
    let alphabet = Alphabet::new([('F', "L10"), ('+', "R+90"), ('-', "R-90")])?;
    LSystem::new(alphabet, "F", [('F', "F+F-F-F+F")])
}

/// Sierpinski arrowhead curve.
pub fn sierpinski_arrowhead() -> Result<LSystem> {
    let alphabet = Alphabet::new([
        ('A', "L10"),
        ('B', "L10"),
        ('+', "R+60"),
        ('-', "R-60"),
    ])?;
    LSystem::new(alphabet, "A", [('A', "B-A-B"), ('B', "A+B+A")])
}

/// Fractal plant branching by `angle` degrees, growing from heading 60°.
///
/// `X` only drives the rewriting and is a placeholder when drawing.
pub fn fractal_plant(angle: u32) -> Result<LSystem> {
    let turn_left = format!("R+{angle}");
    let turn_right = format!("R-{angle}");
    let alphabet = Alphabet::new([
        ('X', "0"),
        ('F', "L10"),
        ('+', turn_left.as_str()),
        ('-', turn_right.as_str()),
        ('[', "P"),
        (']', "p"),
    ])?;
    Ok(
        LSystem::new(alphabet, "X", [('X', "F+[[X]-X]-F[-FX]+X"), ('F', "FF")])?
            .with_heading(60),
    )
}

/// Hilbert space-filling curve, starting along `+X`.
pub fn hilbert_curve() -> Result<LSystem> {
    let alphabet = Alphabet::new([
        ('A', "0"),
        ('B', "0"),
        ('F', "L10"),
        ('+', "R+90"),
        ('-', "R-90"),
    ])?;
    Ok(
        LSystem::new(alphabet, "A", [('A', "+BF-AFA-FB+"), ('B', "-AF+BFB+FA-")])?
            .with_heading(0),
    )
}

/// Koch snowflake: a triangle of Koch curves.
pub fn koch_snowflake() -> Result<LSystem> {
    let alphabet = Alphabet::new([('A', "0"), ('F', "L10"), ('+', "R+60"), ('-', "R-60")])?;
    LSystem::new(alphabet, "A", [('A', "F--F--F"), ('F', "F+F--F+F")])
}
