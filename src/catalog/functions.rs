use super::{compact, Challenge, CognitiveLevel, Example, Exercise, ExerciseType};

pub(super) fn exercise() -> Exercise {
    Exercise {
        id: "functions",
        title: "Functions",
        description: "Write functions with parameters, return values and tuples",
        cognitive_level: CognitiveLevel::Beginner,
        exercise_type: ExerciseType::Application,
        prerequisites: &["variables", "basic-types", "collections"],
        learning_goals: &[
            "Write functions with typed parameters and return values",
            "Return the last expression without a semicolon",
            "Return several values at once with a tuple",
        ],
        examples: vec![
            Example {
                title: "No parameters, no return value",
                code: r#"fn say_hello() {
    println!("Hello, world!");
}"#,
                explanation: "fn, a snake_case name and parentheses. The implicit return type is ().",
                output: Some("Hello, world!"),
            },
            Example {
                title: "Parameters and a return value",
                code: r#"fn area(width: u32, height: u32) -> u32 {
    width * height
}"#,
                explanation: "Every parameter is annotated. The final expression, with no trailing semicolon, is the return value.",
                output: None,
            },
            Example {
                title: "Returning a tuple",
                code: r#"fn min_max(values: &[i32]) -> (i32, i32) {
    let min = *values.iter().min().unwrap();
    let max = *values.iter().max().unwrap();
    (min, max)
}

let (lo, hi) = min_max(&[3, 9, 1]);"#,
                explanation: "Tuples group values of different positions; destructure them with a let pattern.",
                output: None,
            },
        ],
        challenges: vec![
            Challenge {
                description: "Write a function 'add' that takes two i32 values and returns their sum",
                template: r#"// your function here

fn main() {
    println!("{}", add(2, 3));
}"#,
                solution: "fn add(a: i32, b: i32) -> i32 { a + b }",
                hints: &[
                    "Start with fn add(a: i32, b: i32)",
                    "Declare the return type with -> i32",
                    "The body can be just a + b",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("fnadd(") && c.contains("->i32") && c.contains('+')
                },
            },
            Challenge {
                description: "Write a function 'multiply' over two f64 values",
                template: r#"// your function here

fn main() {
    println!("{}", multiply(1.5, 4.0));
}"#,
                solution: "fn multiply(x: f64, y: f64) -> f64 { x * y }",
                hints: &["Same shape as add, with f64 and *"],
                validator: |code| {
                    let c = compact(code);
                    c.contains("fnmultiply(") && c.contains("->f64") && c.contains('*')
                },
            },
            Challenge {
                description: "Write 'div_rem' returning both the quotient and the remainder of two i32 values",
                template: r#"// your function here

fn main() {
    let (q, r) = div_rem(17, 5);
    println!("{q} {r}");
}"#,
                solution: "fn div_rem(a: i32, b: i32) -> (i32, i32) { (a / b, a % b) }",
                hints: &[
                    "The return type is a tuple: (i32, i32)",
                    "% gives the remainder",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("fndiv_rem(") && c.contains("->(i32,i32)") && c.contains('%')
                },
            },
        ],
        estimated_time: 15,
    }
}
