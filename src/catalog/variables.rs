use super::{compact, Challenge, CognitiveLevel, Example, Exercise, ExerciseType};

pub(super) fn exercise() -> Exercise {
    Exercise {
        id: "variables",
        title: "Variables and Bindings",
        description: "Bind values with let, opt into mutability, and reuse names through shadowing",
        cognitive_level: CognitiveLevel::Beginner,
        exercise_type: ExerciseType::Concept,
        prerequisites: &[],
        learning_goals: &[
            "Declare bindings with and without type annotations",
            "Know when a binding needs mut",
            "Use shadowing to transform a value under the same name",
        ],
        examples: vec![
            Example {
                title: "Immutable bindings",
                code: r#"let message: &str = "Hello, world!";
let count: i32 = 42;
let ready = true; // bool inferred"#,
                explanation: "Bindings are immutable by default. The type annotation after the colon is optional when the compiler can infer it.",
                output: None,
            },
            Example {
                title: "Mutable bindings",
                code: r#"let mut total = 0;
total += 10;
total += 5;
println!("{total}");"#,
                explanation: "Add mut when the value must change. Without it the compiler rejects the second assignment.",
                output: Some("15"),
            },
            Example {
                title: "Shadowing",
                code: r#"let input = "  42  ";
let input = input.trim();
let input: u32 = input.parse().unwrap();
println!("{}", input + 1);"#,
                explanation: "A new let with the same name shadows the previous binding, and may even change its type.",
                output: Some("43"),
            },
        ],
        challenges: vec![
            Challenge {
                description: "Bind the name 'name' to a string slice holding your name, with an explicit type annotation",
                template: r#"fn main() {
    // your binding here
    println!("Hello, {name}");
}"#,
                solution: r#"let name: &str = "Ferris";"#,
                hints: &[
                    "Start with the let keyword",
                    "A string literal has type &str",
                    "The annotation goes between the name and the =",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letname:&str=") && !c.contains("letmut")
                },
            },
            Challenge {
                description: "Create a mutable counter 'count' starting at 0 and increase it by one",
                template: r#"fn main() {
    // declare count, then increment it
    println!("{count}");
}"#,
                solution: "let mut count = 0; count += 1;",
                hints: &[
                    "Mutation requires let mut",
                    "Use += to add to the current value",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letmutcount") && (c.contains("count+=1") || c.contains("count=count+1"))
                },
            },
            Challenge {
                description: "Shadow 'spaces' so that it holds the length of the original string",
                template: r#"fn main() {
    let spaces = "   ";
    // shadow spaces here
    println!("{spaces}");
}"#,
                solution: r#"let spaces = "   "; let spaces = spaces.len();"#,
                hints: &[
                    "Write a second let spaces = ...",
                    "str has a len() method",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("letspaces=spaces.len()")
                },
            },
        ],
        estimated_time: 10,
    }
}
