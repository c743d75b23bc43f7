//! Runs the reference password table through the evaluator and prints the results.

use std::process::ExitCode;

use pwd_meter::harness::{CASES, run_cases};

fn main() -> ExitCode {
    println!("Password Strength Meter Tests\n");

    let summary = run_cases(&CASES);
    for outcome in &summary.outcomes {
        println!("{outcome}");
    }

    println!("Results: {} passed, {} failed", summary.passed, summary.failed);

    if summary.all_passed() {
        println!("All tests passed!");
        ExitCode::SUCCESS
    } else {
        println!("Some tests failed. Review the password strength logic.");
        ExitCode::FAILURE
    }
}
