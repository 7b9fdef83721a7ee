use interview_stats::run_main;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_main(
        "interview-stats",
        "Track interview practice sessions and show their statistics",
    )
    .await?;
    Ok(())
}
