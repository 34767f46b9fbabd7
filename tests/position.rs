#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use fieldlog::libs::geo::Position;
    use fieldlog::libs::position::{PositionError, PositionWatch};
    use tokio::sync::mpsc;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_channel_watch_delivers_samples_in_order() {
        let (tx, rx) = mpsc::channel(4);
        let mut watch = PositionWatch::from_channel(rx);

        tx.send(Ok(Position::new(52.5200, 13.4050, at()))).await.unwrap();
        tx.send(Err(PositionError::Timeout)).await.unwrap();

        let first = watch.recv().await.unwrap().unwrap();
        assert_eq!(first.latitude, 52.5200);
        assert!(matches!(watch.recv().await, Some(Err(PositionError::Timeout))));

        // Closing the source ends the subscription without an error.
        drop(tx);
        assert!(watch.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_disconnected_watch_yields_nothing() {
        let mut watch = PositionWatch::disconnected();
        assert!(watch.recv().await.is_none());
    }

    #[test]
    fn test_position_error_display() {
        assert_eq!(PositionError::Timeout.to_string(), "position request timed out");
        assert_eq!(
            PositionError::Unavailable("connection refused".to_string()).to_string(),
            "position source unavailable: connection refused"
        );
    }
}
