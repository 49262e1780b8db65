use std::net::{IpAddr, Ipv6Addr};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use anyhow::Result;
use crate::args::{opt, Format};
use crate::clock::{monotonic, Reference};
use crate::context::Context;
use crate::decode::{FlowKey, FlowMetrics};
use crate::model::Record;

#[test]
fn reference_now() -> Result<()> {
    let a = Reference::now()?;
    let b = Reference::now()?;
    assert!(b.mono >= a.mono);
    assert!(monotonic()? >= b.mono);
    Ok(())
}

#[test]
fn absolute_time() {
    let wall = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    let now  = Reference::new(wall, 5_000_000_000);

    assert_eq!(wall, now.absolute(5_000_000_000));
    assert_eq!(wall - Duration::from_secs(5), now.absolute(0));
    assert_eq!(wall - Duration::from_nanos(1), now.absolute(4_999_999_999));
}

#[test]
fn absolute_time_ahead_of_reference() {
    let wall = UNIX_EPOCH + Duration::from_secs(10);
    let now  = Reference::new(wall, 1_000);
    assert_eq!(wall, now.absolute(2_000));
    assert_eq!(wall, now.absolute(u64::MAX));
}

#[test]
fn absolute_time_before_epoch() {
    let now = Reference::new(UNIX_EPOCH + Duration::from_secs(1), 10_000_000_000);
    assert_eq!(UNIX_EPOCH, now.absolute(0));
}

#[test]
fn absolute_time_bounded_by_wall() -> Result<()> {
    let now = Reference::now()?;
    for ts in &[0, now.mono / 2, now.mono, now.mono + 1] {
        let t: SystemTime = now.absolute(*ts);
        assert!(t <= now.wall);
    }
    Ok(())
}

#[test]
fn shared_context() -> Result<()> {
    let agent = IpAddr::V6(Ipv6Addr::LOCALHOST);
    let ctx   = Arc::new(Context::new(agent, |index: u32| format!("ens{}", index)));
    let now   = Reference::new(UNIX_EPOCH + Duration::from_secs(60), 1_000);

    let workers = (0..4u32).map(|n| {
        let ctx = ctx.clone();
        thread::spawn(move || {
            let metrics = FlowMetrics { if_index_first_seen: n, ..Default::default() };
            Record::new(&ctx, FlowKey::default(), metrics.into(), &now)
        })
    }).collect::<Vec<_>>();

    for (n, worker) in workers.into_iter().enumerate() {
        let record = worker.join().map_err(|_| anyhow::anyhow!("worker panicked"))?;
        let name = record.interface().map(|i| i.name.clone());
        assert_eq!(Some(format!("ens{}", n)), name);
        assert_eq!(agent, record.agent);
    }

    Ok(())
}

#[test]
fn format_arg() -> Result<()> {
    assert_eq!(Some(Format::Json), opt::<Format>(Some("json"))?);
    assert_eq!(Some(Format::Pb),   opt::<Format>(Some("pb"))?);
    assert_eq!(None,               opt::<Format>(None)?);
    assert!(opt::<Format>(Some("xml")).is_err());
    Ok(())
}
