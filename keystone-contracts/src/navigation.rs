use keystone_model::ItemId;

/// Routing primitive used when the focal card is activated.
///
/// Fire-and-forget: the carousel does not wait for, or observe, the
/// outcome of navigation.
pub trait DetailNavigator: Send + Sync {
    fn navigate_to_detail(&self, id: &ItemId);
}

impl<F> DetailNavigator for F
where
    F: Fn(&ItemId) + Send + Sync,
{
    fn navigate_to_detail(&self, id: &ItemId) {
        log::trace!("navigating to detail view for {id}");
        self(id)
    }
}
