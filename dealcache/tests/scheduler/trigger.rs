// standard library
use std::time::Duration;

// internal crates
use dealcache::scheduler::Trigger;

pub mod every {
    use super::*;

    #[test]
    fn does_not_fire_on_start() {
        let trigger = Trigger::every(Duration::from_secs(60));
        assert_eq!(trigger.interval, Duration::from_secs(60));
        assert!(!trigger.fire_on_start);
        assert_eq!(Trigger::from(Duration::from_secs(60)), trigger);
    }

    #[test]
    fn fire_on_start() {
        let trigger = Trigger::every(Duration::from_secs(60)).fire_on_start(true);
        assert!(trigger.fire_on_start);
    }
}
