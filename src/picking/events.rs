//! Typed pick notifications.
//!
//! Listeners either follow every pick, follow a single object through a
//! per-ID registry, or follow hover changes.

use rustc_hash::FxHashMap;

use super::color_id::PickId;

type PickCallback = Box<dyn FnMut(PickId)>;
type HoverCallback = Box<dyn FnMut(Option<PickId>)>;

/// Handle returned by the subscribe methods, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Subscriber registry for pick and hover notifications.
#[derive(Default)]
pub struct PickEvents {
    next_subscription: u64,
    any: Vec<(SubscriptionId, PickCallback)>,
    by_id: FxHashMap<PickId, Vec<(SubscriptionId, PickCallback)>>,
    hover: Vec<(SubscriptionId, HoverCallback)>,
}

impl std::fmt::Debug for PickEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PickEvents")
            .field("any", &self.any.len())
            .field("by_id", &self.by_id.len())
            .field("hover", &self.hover.len())
            .finish()
    }
}

impl PickEvents {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> SubscriptionId {
        self.next_subscription += 1;
        SubscriptionId(self.next_subscription)
    }

    /// Call `callback` for every resolved pick.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(PickId) + 'static,
    ) -> SubscriptionId {
        let sub = self.allocate();
        self.any.push((sub, Box::new(callback)));
        sub
    }

    /// Call `callback` only when `id` is picked.
    pub fn subscribe_to(
        &mut self,
        id: PickId,
        callback: impl FnMut(PickId) + 'static,
    ) -> SubscriptionId {
        let sub = self.allocate();
        self.by_id
            .entry(id)
            .or_default()
            .push((sub, Box::new(callback)));
        sub
    }

    /// Call `callback` whenever the hovered object changes.
    pub fn on_hover(
        &mut self,
        callback: impl FnMut(Option<PickId>) + 'static,
    ) -> SubscriptionId {
        let sub = self.allocate();
        self.hover.push((sub, Box::new(callback)));
        sub
    }

    /// Remove a subscription. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, sub: SubscriptionId) -> bool {
        let before = self.len();
        self.any.retain(|(s, _)| *s != sub);
        self.hover.retain(|(s, _)| *s != sub);
        self.by_id.retain(|_, list| {
            list.retain(|(s, _)| *s != sub);
            !list.is_empty()
        });
        self.len() != before
    }

    /// Notify generic listeners, then listeners registered for `id`.
    pub fn emit_pick(&mut self, id: PickId) {
        for (_, callback) in &mut self.any {
            callback(id);
        }
        if let Some(list) = self.by_id.get_mut(&id) {
            for (_, callback) in list {
                callback(id);
            }
        }
    }

    /// Notify hover listeners.
    pub fn emit_hover(&mut self, id: Option<PickId>) {
        for (_, callback) in &mut self.hover {
            callback(id);
        }
    }

    /// Total number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.any.len()
            + self.hover.len()
            + self.by_id.values().map(Vec::len).sum::<usize>()
    }

    /// Whether nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every subscription.
    pub fn clear(&mut self) {
        self.any.clear();
        self.by_id.clear();
        self.hover.clear();
    }
}
