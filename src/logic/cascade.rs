//! Match end: empty the court, refill it from the first waiting queue, shift the queues up.

use crate::models::{Roster, ZoneId};

/// Per-zone queues, indexed in `ZoneId::ALL` order.
struct ZoneQueues([Vec<String>; 7]);

impl ZoneQueues {
    fn from_roster(roster: &Roster) -> Self {
        Self(std::array::from_fn(|i| {
            roster
                .occupants(ZoneId::ALL[i])
                .into_iter()
                .map(str::to_string)
                .collect()
        }))
    }

    fn slot(zone: ZoneId) -> usize {
        ZoneId::ALL.iter().position(|z| *z == zone).unwrap_or(0)
    }

    fn take(&mut self, zone: ZoneId) -> Vec<String> {
        std::mem::take(&mut self.0[Self::slot(zone)])
    }

    fn queue(&mut self, zone: ZoneId) -> &mut Vec<String> {
        &mut self.0[Self::slot(zone)]
    }

    fn into_roster(self) -> Roster {
        Roster::from_zone_lists(ZoneId::ALL.into_iter().zip(self.0))
    }
}

/// End the match on `court_id` and return the resulting roster.
///
/// 1. Everybody on the court goes to the back of the rest area.
/// 2. The court takes players from the front of `wait1` until it is full or `wait1` is empty.
/// 3. What is left of `wait2` joins the back of `wait1`, then `wait3` joins `wait2`.
///
/// An id that is not a court skips steps 1 and 2; the queues still shift.
pub fn end_match(roster: &Roster, court_id: &str) -> Roster {
    let court = court_id.parse::<ZoneId>().ok().filter(|z| z.is_court());
    let mut queues = ZoneQueues::from_roster(roster);

    if let Some(court) = court {
        let finished = queues.take(court);
        queues.queue(ZoneId::Rest).extend(finished);

        let open = court.capacity().unwrap_or_default();
        let mut wait1 = queues.take(ZoneId::Wait1);
        let promoted = wait1.len().min(open);
        queues.queue(court).extend(wait1.drain(..promoted));
        *queues.queue(ZoneId::Wait1) = wait1;
    }

    for pair in ZoneId::WAITS.windows(2) {
        let moving = queues.take(pair[1]);
        queues.queue(pair[0]).extend(moving);
    }

    queues.into_roster()
}
