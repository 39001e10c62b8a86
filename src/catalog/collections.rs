use super::{compact, Challenge, CognitiveLevel, Example, Exercise, ExerciseType};

pub(super) fn exercise() -> Exercise {
    Exercise {
        id: "collections",
        title: "Vectors and Maps",
        description: "Store many values in Vec and HashMap and walk them with iterators",
        cognitive_level: CognitiveLevel::Intermediate,
        exercise_type: ExerciseType::Application,
        prerequisites: &["variables", "basic-types"],
        learning_goals: &[
            "Grow a Vec and read from it",
            "Insert into and look up a HashMap",
            "Aggregate with iterator adapters",
        ],
        examples: vec![
            Example {
                title: "Growing a vector",
                code: r#"let mut scores = vec![90, 85];
scores.push(77);
println!("{:?} has {} items", scores, scores.len());"#,
                explanation: "vec! builds a Vec from a literal list. push needs a mutable binding because it changes the vector.",
                output: Some("[90, 85, 77] has 3 items"),
            },
            Example {
                title: "Key/value lookups",
                code: r#"use std::collections::HashMap;

let mut ages = HashMap::new();
ages.insert("ada", 36);
if let Some(age) = ages.get("ada") {
    println!("ada is {age}");
}"#,
                explanation: "get returns an Option because the key may be missing. Pattern match on it instead of assuming.",
                output: Some("ada is 36"),
            },
            Example {
                title: "Iterating",
                code: r#"let numbers = [3, 4, 5];
let doubled: Vec<i32> = numbers.iter().map(|n| n * 2).collect();
let total: i32 = numbers.iter().sum();"#,
                explanation: "Iterator adapters like map are lazy; collect or sum drives them to produce a result.",
                output: None,
            },
        ],
        challenges: vec![
            Challenge {
                description: "Create a mutable vector 'languages' with two entries, then push a third",
                template: r#"fn main() {
    // create languages and push a third entry
    println!("{:?}", languages);
}"#,
                solution: r#"let mut languages = vec!["Rust", "Go"]; languages.push("Zig");"#,
                hints: &[
                    "The vec! macro builds a vector literal",
                    "push only works through a mut binding",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letmutlanguages") && c.contains("languages.push(")
                },
            },
            Challenge {
                description: "Build a HashMap 'capitals', insert France -> Paris and look France up",
                template: r#"use std::collections::HashMap;

fn main() {
    // build capitals, insert, then look up
}"#,
                solution: r#"let mut capitals = HashMap::new(); capitals.insert("France", "Paris"); let paris = capitals.get("France");"#,
                hints: &[
                    "Start with HashMap::new()",
                    "insert takes a key and a value",
                    "get takes a reference to the key and returns an Option",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("HashMap::new()") && c.contains(".insert(") && c.contains(".get(")
                },
            },
            Challenge {
                description: "Compute the sum and the average (f64) of 'numbers'",
                template: r#"fn main() {
    let numbers = vec![4, 8, 15, 16, 23, 42];
    // compute sum and average
    println!("{sum} {average}");
}"#,
                solution: "let sum: i32 = numbers.iter().sum(); let average = sum as f64 / numbers.len() as f64;",
                hints: &[
                    "iter().sum() needs the result type annotated",
                    "Cast both operands to f64 before dividing",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains(".iter().sum") && c.contains(".len()asf64")
                },
            },
        ],
        estimated_time: 15,
    }
}
