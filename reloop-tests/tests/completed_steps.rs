#[cfg(test)]
mod tests {
    use reloop_tests::{Flavor, execute_tests, init_logs};

    #[tokio::test]
    async fn completed_steps() {
        init_logs();
        execute_tests(Flavor::Completed).await;
    }
}
