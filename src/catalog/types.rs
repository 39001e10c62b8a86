use super::{compact, Challenge, CognitiveLevel, Example, Exercise, ExerciseType};

pub(super) fn exercise() -> Exercise {
    Exercise {
        id: "basic-types",
        title: "Scalar Types and Constants",
        description: "Work with integers, floats, strings and compile-time constants",
        cognitive_level: CognitiveLevel::Beginner,
        exercise_type: ExerciseType::Concept,
        prerequisites: &["variables"],
        learning_goals: &[
            "Pick a sized integer or float type for a value",
            "Convert between numeric types with as",
            "Declare constants and build owned strings",
        ],
        examples: vec![
            Example {
                title: "Numeric types",
                code: r#"let small: u8 = 255;
let big: i64 = -9_000_000_000;
let pi: f64 = 3.14159;"#,
                explanation: "Integer types carry their signedness and width in the name. Underscores are allowed as digit separators.",
                output: None,
            },
            Example {
                title: "Explicit conversion",
                code: r#"let items: i32 = 7;
let half = items as f64 / 2.0;
println!("{half}");"#,
                explanation: "Rust never converts numbers implicitly. Use as for primitive casts.",
                output: Some("3.5"),
            },
            Example {
                title: "Constants and strings",
                code: r#"const GREETING: &str = "Hello";
let name = String::from("Ferris");
let line = format!("{GREETING}, {name}!");"#,
                explanation: "Constants always need a type annotation. format! builds a new String from pieces.",
                output: Some("Hello, Ferris!"),
            },
        ],
        challenges: vec![
            Challenge {
                description: "Declare a constant MAX_USERS of type u32 set to 100",
                template: r#"// your constant here

fn main() {
    println!("{MAX_USERS}");
}"#,
                solution: "const MAX_USERS: u32 = 100;",
                hints: &[
                    "Constants use the const keyword",
                    "The type annotation is mandatory for constants",
                ],
                validator: |code| compact(code).contains("constMAX_USERS:u32="),
            },
            Challenge {
                description: "Given an i64 'total', compute 'ratio' as total divided by 2.0 as an f64",
                template: r#"fn main() {
    let total: i64 = 42;
    // compute ratio here
    println!("{ratio}");
}"#,
                solution: "let total: i64 = 42; let ratio = total as f64 / 2.0;",
                hints: &[
                    "You cannot divide an i64 by an f64 directly",
                    "Cast with total as f64 first",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letratio") && c.contains("asf64")
                },
            },
            Challenge {
                description: "Build 'full_name' from 'first' and 'last' separated by a space",
                template: r#"fn main() {
    let first = "Grace";
    let last = "Hopper";
    // build full_name here
    println!("{full_name}");
}"#,
                solution: r#"let full_name = format!("{} {}", first, last);"#,
                hints: &[
                    "The format! macro returns a String",
                    "Use two {} placeholders with a space between them",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letfull_name") && (c.contains("format!(") || c.contains("+&last"))
                },
            },
        ],
        estimated_time: 12,
    }
}
