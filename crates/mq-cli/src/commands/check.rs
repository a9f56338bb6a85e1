use std::path::Path;

use mq_core::QuestionBank;

pub fn run(questions: &Path) -> Result<(), String> {
    let bank = QuestionBank::load(questions).map_err(|e| e.to_string())?;

    println!("  {} questions loaded from '{}'.", bank.len(), questions.display());

    let missing = bank.missing_difficulties();
    if missing.is_empty() {
        println!("  Every difficulty 1-12 is covered. All checks passed.");
        Ok(())
    } else {
        let list: Vec<String> = missing.iter().map(|d| d.to_string()).collect();
        println!("  No questions at difficulty: {}", list.join(", "));
        Err("question pool does not cover every difficulty".into())
    }
}
