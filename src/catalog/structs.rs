use super::{compact, Challenge, CognitiveLevel, Example, Exercise, ExerciseType};

pub(super) fn exercise() -> Exercise {
    Exercise {
        id: "structs",
        title: "Structs and Methods",
        description: "Model data with structs and attach behaviour through impl blocks",
        cognitive_level: CognitiveLevel::Intermediate,
        exercise_type: ExerciseType::Synthesis,
        prerequisites: &["variables", "basic-types", "functions"],
        learning_goals: &[
            "Define a struct with named fields",
            "Add methods that borrow self immutably or mutably",
            "Derive common traits",
        ],
        examples: vec![
            Example {
                title: "Defining and constructing",
                code: r#"struct User {
    name: String,
    active: bool,
}

let user = User { name: String::from("ada"), active: true };"#,
                explanation: "Fields are listed with their types. Construction names every field.",
                output: None,
            },
            Example {
                title: "Methods",
                code: r#"struct Counter {
    value: u32,
}

impl Counter {
    fn new() -> Self {
        Counter { value: 0 }
    }

    fn increment(&mut self) {
        self.value += 1;
    }

    fn get(&self) -> u32 {
        self.value
    }
}"#,
                explanation: "new is an associated function. &self reads, &mut self modifies.",
                output: None,
            },
            Example {
                title: "Derived traits",
                code: r#"#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

let p = Point { x: 1, y: 2 };
println!("{:?}", p.clone());"#,
                explanation: "derive generates trait implementations such as Debug printing and cloning.",
                output: Some("Point { x: 1, y: 2 }"),
            },
        ],
        challenges: vec![
            Challenge {
                description: "Define a struct Book with a title and a page count, plus a method 'describe' that borrows self",
                template: r#"// your struct and impl here

fn main() {
    let book = Book { title: String::from("Dune"), pages: 412 };
    println!("{}", book.describe());
}"#,
                solution: r#"struct Book { title: String, pages: u32 } impl Book { fn describe(&self) -> String { format!("{} ({} pages)", self.title, self.pages) } }"#,
                hints: &[
                    "struct Book { title: String, pages: u32 }",
                    "Methods live in impl Book { ... }",
                    "describe takes &self and returns a String",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("structBook{") && c.contains("implBook") && c.contains("fndescribe(&self")
                },
            },
            Challenge {
                description: "Define BankAccount with a balance and methods 'deposit' and 'withdraw' that change it",
                template: r#"// your struct and impl here

fn main() {
    let mut account = BankAccount { balance: 0 };
    account.deposit(50);
    account.withdraw(20);
}"#,
                solution: "struct BankAccount { balance: i64 } impl BankAccount { fn deposit(&mut self, amount: i64) { self.balance += amount; } fn withdraw(&mut self, amount: i64) { self.balance -= amount; } }",
                hints: &[
                    "Both methods modify the struct, so they take &mut self",
                    "Update self.balance with += and -=",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("structBankAccount")
                        && c.contains("fndeposit(&mutself")
                        && c.contains("fnwithdraw(&mutself")
                },
            },
            Challenge {
                description: "Define a struct Point with x and y that derives Debug and Clone",
                template: r#"// your struct here

fn main() {
    let p = Point { x: 3, y: 4 };
    println!("{:?}", p.clone());
}"#,
                solution: "#[derive(Debug, Clone)] struct Point { x: i32, y: i32 }",
                hints: &[
                    "Put #[derive(...)] on the line above the struct",
                    "List Debug and Clone inside the derive",
                ],
                validator: |code| {
                    let c = compact(code);
                    c.contains("#[derive(")
                        && c.contains("Debug")
                        && c.contains("Clone")
                        && c.contains("structPoint")
                },
            },
        ],
        estimated_time: 20,
    }
}
