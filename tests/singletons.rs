#[cfg(test)]
mod tests {
    use futures::FutureExt;
    use reloop::{
        Completed, FALSE, Null, TRUE, VOID, ZERO, completed_future, failed_future, false_future,
        null_future, true_future, void_future, void_future_ignoring, zero_future,
    };
    use std::ptr;

    #[test]
    fn singletons_are_the_prebuilt_instances() {
        assert_eq!(void_future(), VOID);
        assert_eq!(zero_future(), ZERO);
        assert_eq!(true_future(), TRUE);
        assert_eq!(false_future(), FALSE);
        assert_eq!(void_future_ignoring("anything"), VOID);
        assert!(ptr::eq(&VOID, &VOID));
        assert_eq!(*ZERO.value(), 0);
        assert!(*TRUE.value());
        assert!(!*FALSE.value());
        assert_ne!(TRUE, FALSE);
        assert_eq!(null_future::<String>(), Null::default());
    }

    #[tokio::test]
    async fn singletons_resolve() {
        void_future().await.expect("Void must succeed");
        assert_eq!(zero_future().await.unwrap(), 0);
        assert_eq!(true_future().await.unwrap(), true);
        assert_eq!(false_future().await.unwrap(), false);
        assert_eq!(null_future::<Vec<u8>>().await.unwrap(), None);
        assert_eq!(completed_future("value").await.unwrap(), "value");
        assert_eq!(Completed::new(3).into_inner(), 3);
    }

    #[test]
    fn singletons_can_be_awaited_many_times() {
        for _ in 0..3 {
            assert_eq!(ZERO.now_or_never().unwrap().unwrap(), 0);
            assert_eq!(TRUE.now_or_never().unwrap().unwrap(), true);
        }
    }

    #[tokio::test]
    async fn failed_future_fails() {
        let error = failed_future::<i32>(std::fmt::Error)
            .await
            .expect_err("Expected a failure");
        assert!(error.downcast_ref::<std::fmt::Error>().is_some());
    }
}
