use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Drive a long-running job until it ends by itself or shutdown is requested.
///
/// Output of the job is dropped, jobs report their failures through logs.
pub async fn spawn_with_token<R>(token: CancellationToken, job: impl Future<Output = R>) {
    tokio::select! {
        biased;
        () = token.cancelled() => log::debug!("job cancelled"),
        _ = job => {},
    }
}
