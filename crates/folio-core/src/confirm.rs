// ── Confirmation gate ──
//
// Holds a destructive action until the user answers the prompt. Nothing
// reaches the content store unless `confirm` hands the action back.

/// A single pending action awaiting yes/no.
#[derive(Debug)]
pub struct ConfirmGate<T> {
    pending: Option<T>,
}

impl<T> Default for ConfirmGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ConfirmGate<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation of `action`, replacing any unanswered request.
    pub fn request(&mut self, action: T) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// User said yes: release the action for execution.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// User said no: drop the action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_releases_nothing() {
        let mut gate = ConfirmGate::new();
        gate.request("delete 3");
        assert!(gate.is_pending());
        gate.cancel();
        assert!(!gate.is_pending());
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn confirm_releases_once() {
        let mut gate = ConfirmGate::new();
        gate.request(1);
        gate.request(2);
        assert_eq!(gate.pending(), Some(&2));
        assert_eq!(gate.confirm(), Some(2));
        assert_eq!(gate.confirm(), None);
    }
}
