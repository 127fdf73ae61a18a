use crate::models::domain::{QuizQuestion, SubjectCategory};

/// A curated question stored as static reference data.
#[derive(Debug)]
pub struct BankQuestion {
    pub question: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

/// Canonical topic name and its curated questions, in display order.
#[derive(Debug)]
pub struct BankTopic {
    pub name: &'static str,
    pub questions: &'static [BankQuestion],
}

impl BankQuestion {
    pub fn to_question(&self) -> QuizQuestion {
        QuizQuestion::new(
            self.question,
            self.options.iter().map(|o| o.to_string()).collect(),
            self.correct,
            self.explanation,
        )
    }
}

impl BankTopic {
    pub fn to_questions(&self) -> Vec<QuizQuestion> {
        self.questions.iter().map(BankQuestion::to_question).collect()
    }
}

pub fn question_bank(subject: SubjectCategory) -> &'static [BankTopic] {
    match subject {
        SubjectCategory::Database => DATABASE_BANK,
        SubjectCategory::Programming => PROGRAMMING_BANK,
        SubjectCategory::Mathematics => MATHEMATICS_BANK,
        SubjectCategory::Science => SCIENCE_BANK,
        SubjectCategory::Default => &[],
    }
}

const DATABASE_BANK: &[BankTopic] = &[
    BankTopic {
        name: "Database Management Systems",
        questions: &[
            BankQuestion {
                question: "What is a Database Management System (DBMS)?",
                options: &[
                    "A collection of programs that manages database structure and access",
                    "A single program that stores data files",
                    "A hardware component for data storage",
                    "A network protocol for data transfer",
                ],
                correct: 0,
                explanation: "A DBMS is a collection of programs that enables users to create, maintain, and access databases efficiently.",
            },
            BankQuestion {
                question: "Which of the following is NOT a function of DBMS?",
                options: &[
                    "Data definition and manipulation",
                    "Data security and integrity",
                    "Hardware maintenance",
                    "Concurrent access control",
                ],
                correct: 2,
                explanation: "DBMS handles software-level database operations, not hardware maintenance.",
            },
        ],
    },
    BankTopic {
        name: "SQL",
        questions: &[
            BankQuestion {
                question: "Which SQL command is used to retrieve data?",
                options: &["SELECT", "INSERT", "UPDATE", "DELETE"],
                correct: 0,
                explanation: "SELECT is used to query and retrieve data from database tables.",
            },
            BankQuestion {
                question: "What does the WHERE clause do in SQL?",
                options: &[
                    "Filters rows based on specified conditions",
                    "Sorts the result set",
                    "Groups rows together",
                    "Joins multiple tables",
                ],
                correct: 0,
                explanation: "WHERE clause filters rows that meet specific conditions.",
            },
        ],
    },
    BankTopic {
        name: "Normalization",
        questions: &[BankQuestion {
            question: "What is the main goal of database normalization?",
            options: &[
                "Eliminate data redundancy and improve data integrity",
                "Increase database size",
                "Make queries more complex",
                "Reduce database performance",
            ],
            correct: 0,
            explanation: "Normalization reduces redundancy and maintains data consistency.",
        }],
    },
];

const PROGRAMMING_BANK: &[BankTopic] = &[
    BankTopic {
        name: "Variables",
        questions: &[BankQuestion {
            question: "What is a variable in programming?",
            options: &[
                "A named storage location that holds data",
                "A fixed value that cannot change",
                "A type of loop structure",
                "A function parameter",
            ],
            correct: 0,
            explanation: "Variables are containers that store data values that can be referenced and manipulated.",
        }],
    },
    BankTopic {
        name: "Functions",
        questions: &[BankQuestion {
            question: "What is the purpose of functions in programming?",
            options: &[
                "To organize code into reusable blocks",
                "To slow down program execution",
                "To increase memory usage",
                "To make code harder to read",
            ],
            correct: 0,
            explanation: "Functions help organize code, promote reusability, and improve maintainability.",
        }],
    },
];

const MATHEMATICS_BANK: &[BankTopic] = &[
    BankTopic {
        name: "Algebra",
        questions: &[BankQuestion {
            question: "What is the solution to 2x + 5 = 15?",
            options: &["x = 5", "x = 10", "x = 7.5", "x = 20"],
            correct: 0,
            explanation: "Solving: 2x + 5 = 15, so 2x = 10, therefore x = 5.",
        }],
    },
    BankTopic {
        name: "Calculus",
        questions: &[BankQuestion {
            question: "What is the derivative of x²?",
            options: &["2x", "x", "x³", "2x²"],
            correct: 0,
            explanation: "Using the power rule: d/dx(x²) = 2x¹ = 2x.",
        }],
    },
];

const SCIENCE_BANK: &[BankTopic] = &[
    BankTopic {
        name: "Physics",
        questions: &[BankQuestion {
            question: "What is Newton's First Law of Motion?",
            options: &[
                "An object at rest stays at rest unless acted upon by force",
                "Force equals mass times acceleration",
                "For every action there is an equal and opposite reaction",
                "Energy cannot be created or destroyed",
            ],
            correct: 0,
            explanation: "Newton's First Law states that objects maintain their state of motion unless acted upon by an external force.",
        }],
    },
    BankTopic {
        name: "Chemistry",
        questions: &[BankQuestion {
            question: "What is the chemical symbol for water?",
            options: &["H₂O", "CO₂", "NaCl", "O₂"],
            correct: 0,
            explanation: "Water consists of two hydrogen atoms and one oxygen atom: H₂O.",
        }],
    },
];
