#[cfg(test)]
mod tests {
    use reloop_tests::{Flavor, execute_tests, init_logs};

    #[tokio::test]
    async fn suspending_steps() {
        init_logs();
        execute_tests(Flavor::Suspending).await;
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn suspending_steps_multi_thread() {
        init_logs();
        execute_tests(Flavor::Suspending).await;
    }
}
