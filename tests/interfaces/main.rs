//! Interface tests for the ownership layer using Cucumber.
//!
//! The scenarios describe how owners and views of each release discipline
//! talk to the foreign library, and how foreign lists are walked.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::writer::Stats as _;
use cucumber::World;
use steps::list_iteration::ListWorld;
use steps::ownership::OwnershipWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running Ownership Interface Tests ===\n");
    let ownership = OwnershipWorld::cucumber()
        .fail_on_skipped()
        .run("tests/interfaces/features/ownership.feature")
        .await;

    println!("\n=== Running List Iteration Interface Tests ===\n");
    let lists = ListWorld::cucumber()
        .fail_on_skipped()
        .run("tests/interfaces/features/list_iteration.feature")
        .await;

    if ownership.execution_has_failed() || lists.execution_has_failed() {
        std::process::exit(1);
    }
}
