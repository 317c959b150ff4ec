//! End-to-end tests driving `SensorSession` over the mock bus.
//!
//! Run with: cargo test --test session_integration

use imx091_ctl::hardware::mock::{MockBus, MockDelay, MockPower};
use imx091_ctl::registers::{TableOp, GROUPED_PARAMETER_HOLD, MODE_SELECT};
use imx091_ctl::{ExposureUpdate, ModeRequest, SensorError, SensorMode, SensorSession};

fn new_session() -> (MockBus, MockDelay, SensorSession<MockBus, MockDelay>) {
    let bus = MockBus::new();
    let delay = MockDelay::new();
    let session = SensorSession::new(bus.clone(), delay.clone())
        .with_power(Box::new(MockPower::new()));
    session.acquire().unwrap();
    (bus, delay, session)
}

fn request_for(mode: SensorMode, frame_length: u32) -> ModeRequest {
    let (width, height) = mode.request_resolution();
    ModeRequest {
        width,
        height,
        frame_length,
        coarse_time: 0x0200,
        gain: 0x30,
    }
}

#[test]
fn test_every_mode_writes_its_table_in_order() {
    for mode in SensorMode::ALL {
        let (bus, delay, mut session) = new_session();
        session.set_mode(&request_for(mode, 0x0ABC)).unwrap();

        let expected: Vec<(u16, u8)> = mode
            .table()
            .iter()
            .take_while(|e| e.op() != TableOp::End)
            .filter_map(|e| match e.op() {
                TableOp::Write { address: 0x0340, .. } => Some((0x0340, 0x0A)),
                TableOp::Write { address: 0x0341, .. } => Some((0x0341, 0xBC)),
                TableOp::Write { address, value } => Some((address, value as u8)),
                _ => None,
            })
            .collect();
        let sentinels = mode.table().iter().filter(|e| e.is_sentinel()).count();
        let waits = mode
            .table()
            .iter()
            .filter(|e| matches!(e.op(), TableOp::Wait(_)))
            .count();

        assert_eq!(bus.writes(), expected, "mode {mode}");
        assert_eq!(bus.writes().len(), mode.table().len() - sentinels);
        assert_eq!(delay.requests().len(), waits);
        assert_eq!(session.mode(), Some(mode));
    }
}

#[test]
fn test_full_resolution_script_shape() {
    let (bus, _, mut session) = new_session();
    session
        .set_mode(&ModeRequest {
            width: 4208,
            height: 3120,
            frame_length: 0x0C4A,
            coarse_time: 0x0C40,
            gain: 0x20,
        })
        .unwrap();

    let writes = bus.writes();
    assert_eq!(writes.len(), 89);
    assert_eq!(writes.first(), Some(&(MODE_SELECT, 0x00)));
    assert_eq!(writes.last(), Some(&(MODE_SELECT, 0x01)));
    // coarse time and gain are not part of the table script
    assert!(!writes.iter().any(|(a, _)| *a == 0x0202 || *a == 0x0205));
}

#[test]
fn test_unknown_resolution_issues_no_writes() {
    let (bus, delay, mut session) = new_session();
    let err = session
        .set_mode(&ModeRequest {
            width: 9999,
            height: 9999,
            frame_length: 1,
            coarse_time: 1,
            gain: 1,
        })
        .unwrap_err();

    assert_eq!(
        err,
        SensorError::InvalidResolution {
            width: 9999,
            height: 9999
        }
    );
    assert!(bus.ops().is_empty());
    assert!(delay.requests().is_empty());
}

#[test]
fn test_failure_at_position_k_stops_after_k_writes() {
    for k in [0usize, 1, 17, 88] {
        let (bus, _, mut session) = new_session();
        bus.fail_write_at(k);

        let err = session
            .set_mode(&request_for(SensorMode::Mode4208x3120, 0x0C4A))
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(bus.writes().len(), k);
        assert_eq!(bus.write_attempts() as usize, k + 4);
        assert_eq!(session.mode(), None);
    }
}

#[test]
fn test_recovery_by_reissuing_mode_set() {
    let (bus, _, mut session) = new_session();
    bus.fail_write_at(40);
    assert!(session
        .set_mode(&request_for(SensorMode::Mode1308x736, 0x02F0))
        .is_err());

    bus.heal();
    bus.clear_ops();
    session
        .set_mode(&request_for(SensorMode::Mode1308x736, 0x02F0))
        .unwrap();
    assert_eq!(bus.writes().first(), Some(&(MODE_SELECT, 0x00)));
    assert_eq!(session.mode(), Some(SensorMode::Mode1308x736));
}

#[test]
fn test_transient_bus_errors_are_absorbed() {
    let (bus, _, mut session) = new_session();
    bus.fail_next_writes(3);

    session
        .set_mode(&request_for(SensorMode::Mode348x260, 0x0136))
        .unwrap();
    assert_eq!(session.mode(), Some(SensorMode::Mode348x260));
}

#[test]
fn test_detached_bus_fails_fast() {
    let (bus, delay, mut session) = new_session();
    bus.detach();

    let err = session
        .set_mode(&request_for(SensorMode::Mode2104x1560, 0x0658))
        .unwrap_err();

    assert_eq!(err, SensorError::TransportUnavailable);
    assert_eq!(bus.write_attempts(), 0);
    assert!(delay.requests().is_empty());
}

#[test]
fn test_group_hold_bracketing() {
    let (bus, _, mut session) = new_session();

    session
        .set_group_hold(&ExposureUpdate {
            gain: Some(0x40),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(bus.writes(), vec![(0x0205, 0x40)]);

    bus.clear_ops();
    session
        .set_group_hold(&ExposureUpdate {
            coarse_time: Some(0x0300),
            frame_length: Some(0x0658),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(
        bus.writes(),
        vec![
            (0x0104, 0x01),
            (0x0202, 0x03),
            (0x0203, 0x00),
            (0x0340, 0x06),
            (0x0341, 0x58),
            (0x0104, 0x00),
        ]
    );
}

#[test]
fn test_hold_enable_failure_writes_nothing_else() {
    let (bus, _, mut session) = new_session();
    bus.fail_writes_to(GROUPED_PARAMETER_HOLD);

    let result = session.set_group_hold(&ExposureUpdate {
        gain: Some(1),
        coarse_time: Some(2),
        frame_length: Some(3),
    });

    assert!(matches!(
        result,
        Err(SensorError::TransferFailed { address: 0x0104, attempts: 4, .. })
    ));
    assert!(bus.writes().is_empty());
}

#[test]
fn test_standalone_setters() {
    let (bus, _, mut session) = new_session();
    session.set_coarse_time(0x0C40, true).unwrap();
    session.set_frame_length(0x0C4A, false).unwrap();
    session.set_gain(0x20, false).unwrap();

    assert_eq!(
        bus.writes(),
        vec![
            (0x0104, 0x01),
            (0x0202, 0x0C),
            (0x0203, 0x40),
            (0x0104, 0x00),
            (0x0340, 0x0C),
            (0x0341, 0x4A),
            (0x0205, 0x20),
        ]
    );
}

#[test]
fn test_fuse_id_read_once() {
    let bus = MockBus::new();
    let fuse = [0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC, 0xDE, 0xF0];
    for (i, byte) in fuse.iter().enumerate() {
        bus.set_register(0x3580 + i as u16, *byte);
    }
    let mut session =
        SensorSession::new(bus.clone(), MockDelay::new()).with_power(Box::new(MockPower::new()));
    session.acquire().unwrap();

    let first = session.sensor_identity().unwrap();
    assert_eq!(bus.read_attempts(), 8);
    assert_eq!(first.fuse_id(), &fuse);

    let second = session.sensor_identity().unwrap();
    assert_eq!(bus.read_attempts(), 8);
    assert_eq!(first, second);
}

#[test]
fn test_admission_gate() {
    let power = MockPower::new();
    let session =
        SensorSession::new(MockBus::new(), MockDelay::new()).with_power(Box::new(power.clone()));

    session.acquire().unwrap();
    assert_eq!(session.acquire(), Err(SensorError::AlreadyInUse));
    session.release();
    session.acquire().unwrap();
    session.release();

    assert_eq!(power.on_count(), 2);
    assert_eq!(power.off_count(), 2);
}

#[test]
fn test_unacquired_session_issues_no_writes() {
    let bus = MockBus::new();
    let mut session = SensorSession::new(bus.clone(), MockDelay::new());

    let result = session.set_mode(&request_for(SensorMode::Mode4208x3120, 0x0C4A));
    assert_eq!(result, Err(SensorError::NotAcquired));
    assert_eq!(session.set_gain(5, true), Err(SensorError::NotAcquired));

    assert!(bus.ops().is_empty());
    assert_eq!(bus.write_attempts(), 0);
    assert_eq!(session.mode(), None);
}
