use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Run `f` until it completes or `token` is cancelled
pub async fn run_until_cancelled<R>(job: &'static str, token: CancellationToken, f: impl Future<Output = R>) {
    tokio::select! {
        _ = token.cancelled() => log::debug!("job {job} cancelled"),
        _ = f => log::debug!("job {job} finished"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_cancelled_job_returns() {
        let token = CancellationToken::new();
        token.cancel();

        let never = std::future::pending::<()>();
        tokio::time::timeout(Duration::from_secs(1), run_until_cancelled("test", token, never))
            .await
            .expect("job was not cancelled");
    }

    #[tokio::test]
    async fn test_finished_job_returns() {
        run_until_cancelled("test", CancellationToken::new(), async {}).await;
    }
}
