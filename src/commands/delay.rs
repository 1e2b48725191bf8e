use log::debug;
use std::time::Instant;

#[tracing::instrument]
pub async fn delay(duration_ms: u64) {
    let start = Instant::now();
    crate::delay::delay(duration_ms).await;
    debug!("Waited {:?}", start.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_delay_command_waits() {
        let start = Instant::now();
        delay(20).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
