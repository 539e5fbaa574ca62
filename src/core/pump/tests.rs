use super::{FetchDisposition, Pump};
use crate::core::{demand::Demand, fetch_state::FetchState, stream_error::StreamError};

#[test]
fn demand_schedules_a_fetch_when_idle() {
  let mut pump = Pump::new();
  assert_eq!(pump.on_demand(3), Ok(true));
  assert_eq!(pump.begin_fetch(), Ok(3));
  assert_eq!(pump.fetch_state(), FetchState::InFlight);
}

#[test]
fn demand_during_in_flight_fetch_does_not_reschedule() {
  let mut pump = Pump::new();
  pump.on_demand(3).expect("demand");
  pump.begin_fetch().expect("begin");
  assert_eq!(pump.on_demand(2), Ok(false));
  assert_eq!(pump.demand(), Demand::new(5));
}

#[test]
fn begin_fetch_without_demand_is_rejected() {
  let mut pump = Pump::new();
  assert_eq!(pump.begin_fetch(), Err(StreamError::IllegalTransition));
}

#[test]
fn begin_fetch_while_in_flight_is_rejected() {
  let mut pump = Pump::new();
  pump.on_demand(1).expect("demand");
  pump.begin_fetch().expect("begin");
  assert_eq!(pump.begin_fetch(), Err(StreamError::IllegalTransition));
}

#[test]
fn zero_demand_is_rejected() {
  let mut pump = Pump::new();
  assert_eq!(pump.on_demand(0), Err(StreamError::InvalidDemand));
}

#[test]
fn successful_fetch_consumes_demand_and_reschedules() {
  let mut pump = Pump::new();
  pump.on_demand(5).expect("demand");
  assert_eq!(pump.begin_fetch(), Ok(5));
  assert_eq!(pump.on_fetch_succeeded(3, false), Ok(FetchDisposition::ScheduleNext));
  assert_eq!(pump.demand(), Demand::new(2));
  assert_eq!(pump.begin_fetch(), Ok(2));
  assert_eq!(pump.on_fetch_succeeded(2, false), Ok(FetchDisposition::AwaitDemand));
  assert_eq!(pump.demand(), Demand::ZERO);
}

#[test]
fn end_of_stream_completes_the_pump() {
  let mut pump = Pump::new();
  pump.on_demand(2).expect("demand");
  pump.begin_fetch().expect("begin");
  assert_eq!(pump.on_fetch_succeeded(1, true), Ok(FetchDisposition::Completed));
  assert_eq!(pump.fetch_state(), FetchState::Completed);
  assert!(pump.is_finished());
}

#[test]
fn demand_after_terminal_state_is_ignored() {
  let mut pump = Pump::new();
  pump.on_demand(1).expect("demand");
  pump.begin_fetch().expect("begin");
  pump.on_fetch_succeeded(1, true).expect("succeed");
  assert_eq!(pump.on_demand(4), Ok(false));
  assert_eq!(pump.demand(), Demand::ZERO);
}

#[test]
fn overdelivery_fails_the_pump() {
  let mut pump = Pump::new();
  pump.on_demand(2).expect("demand");
  pump.begin_fetch().expect("begin");
  assert_eq!(pump.on_fetch_succeeded(3, false), Err(StreamError::Overdelivery { produced: 3, demanded: 2 }));
  assert_eq!(pump.fetch_state(), FetchState::Failed);
  assert_eq!(pump.on_demand(1), Ok(false));
}

#[test]
fn overdelivery_is_checked_against_the_schedule_time_snapshot() {
  let mut pump = Pump::new();
  pump.on_demand(2).expect("demand");
  pump.begin_fetch().expect("begin");
  // Demand arriving mid-flight must not widen what the running fetch may
  // deliver.
  pump.on_demand(3).expect("demand");
  assert_eq!(pump.on_fetch_succeeded(4, false), Err(StreamError::Overdelivery { produced: 4, demanded: 2 }));
}

#[test]
fn fetch_result_without_in_flight_fetch_is_rejected() {
  let mut pump = Pump::new();
  assert_eq!(pump.on_fetch_succeeded(1, false), Err(StreamError::IllegalTransition));
}

#[test]
fn fetch_failure_is_terminal() {
  let mut pump = Pump::new();
  pump.on_demand(1).expect("demand");
  pump.begin_fetch().expect("begin");
  pump.on_fetch_failed();
  assert_eq!(pump.fetch_state(), FetchState::Failed);
  assert_eq!(pump.on_demand(1), Ok(false));
}

#[test]
fn cancel_prevents_further_scheduling() {
  let mut pump = Pump::new();
  pump.on_cancel();
  assert!(pump.is_cancelled());
  assert_eq!(pump.on_demand(3), Ok(false));
  assert_eq!(pump.begin_fetch(), Err(StreamError::IllegalTransition));
}

#[test]
fn total_delivered_never_exceeds_total_requested() {
  let mut pump = Pump::new();
  let mut delivered = 0_u64;
  let requests = [2_u64, 1, 4];
  let mut requested = 0_u64;
  for amount in requests {
    pump.on_demand(amount).expect("demand");
    requested += amount;
    while let Ok(snapshot) = pump.begin_fetch() {
      pump.on_fetch_succeeded(snapshot, false).expect("succeed");
      delivered += snapshot;
      assert!(delivered <= requested);
    }
  }
  assert_eq!(delivered, requested);
}
