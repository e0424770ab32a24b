/// Receives the ids of slots changed by a committed gesture
pub trait SlotChangeListener {
    fn slots_changed(&mut self, slot_ids: &[String]);
}

impl<F> SlotChangeListener for F
where
    F: FnMut(&[String]),
{
    fn slots_changed(&mut self, slot_ids: &[String]) {
        self(slot_ids)
    }
}

pub struct NoopListener;

impl SlotChangeListener for NoopListener {
    fn slots_changed(&mut self, _slot_ids: &[String]) {}
}
