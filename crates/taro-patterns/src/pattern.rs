//! The composed widget type behind every list pattern.
//!
//! [`Pattern<H, K>`] wraps a host `H` and implements every capability trait
//! from `taro-core` at once. The kind `K` is a zero-sized marker that supplies
//! the pattern's defaults (orientation and key schemes), so a listbox, a menu,
//! and a tab-list are the same type with different markers:
//!
//! | Layer | Provided by |
//! |-------|-------------|
//! | unique id | [`UniqueId`], assigned in [`setup`](HasLifecycle::setup) |
//! | lifecycle | forwarded to the host after id assignment |
//! | disabled | own field |
//! | orientation / text direction | own fields, orientation defaulted by `K` |
//! | active descendant | own id field, items read from the host |
//! | selected descendant | when the host's items are [`CanBeSelected`] |
//! | key dispatch | [`KeySchemes`] seeded by `K` |
//! | focus | forwarded to the host |

use crate::options::PatternOptions;
use std::marker::PhantomData;
use taro_core::{
    AffectedByRtl, CanBeDisabled, CanBeFocused, CanBeSelected, HasActiveDescendant, HasId,
    HasItems, HasKeySchemes, HasLifecycle, HasOrientation, HasSelectedDescendant, IdSource,
    KeySchemes, UniqueId,
};

/// What a host must provide for a list pattern: its items, focus, and
/// (possibly empty) lifecycle hooks.
pub trait ListHost: HasItems + CanBeFocused + HasLifecycle {}

impl<T: HasItems + CanBeFocused + HasLifecycle> ListHost for T {}

/// Per-pattern defaults.
///
/// Implemented by zero-sized markers such as
/// [`ListboxKind`](crate::listbox::ListboxKind). The host type is a parameter
/// because the default key schemes may need more from the host's items (a
/// listbox needs selectable items, a menu does not).
pub trait PatternKind<H: HasItems>: Sized + 'static {
    /// Pattern name used in diagnostics.
    const NAME: &'static str;

    /// Whether the pattern is horizontal unless configured otherwise.
    const HORIZONTAL: bool = false;

    /// The key schemes a new pattern starts with, in dispatch order.
    fn key_schemes() -> KeySchemes<Pattern<H, Self>>;
}

/// A host wrapped with the full set of list-widget capabilities.
///
/// Construct through the kind-specific aliases:
///
/// ```ignore
/// use taro_core::SequentialIds;
/// use taro_patterns::Listbox;
///
/// let ids = SequentialIds::shared();
/// let mut listbox = Listbox::new(host, &ids).with_multiple(true);
/// listbox.setup();
/// listbox.handle_key(&event)?;
/// ```
pub struct Pattern<H, K> {
    uid: UniqueId,
    disabled: bool,
    horizontal: bool,
    rtl: bool,
    active_descendant_id: String,
    multiple: bool,
    key_schemes: KeySchemes<Pattern<H, K>>,
    host: H,
    kind: PhantomData<fn() -> K>,
}

impl<H, K> Pattern<H, K>
where
    H: ListHost,
    K: PatternKind<H>,
{
    /// Wrap `host` with the pattern's defaults. Ids are drawn from `ids` when
    /// [`setup`](HasLifecycle::setup) runs.
    pub fn new(host: H, ids: &IdSource) -> Self {
        Self::with_options(host, ids, PatternOptions::default())
    }

    /// Wrap `host` with explicit options.
    pub fn with_options(host: H, ids: &IdSource, options: PatternOptions) -> Self {
        tracing::trace!("new {} with {:?}", K::NAME, options);
        Self {
            uid: UniqueId::new(ids),
            disabled: options.disabled,
            horizontal: options.resolve_horizontal(K::HORIZONTAL),
            rtl: options.rtl,
            active_descendant_id: String::new(),
            multiple: options.multiple,
            key_schemes: K::key_schemes(),
            host,
            kind: PhantomData,
        }
    }

    /// The pattern's name, e.g. `"listbox"`.
    pub fn kind_name(&self) -> &'static str {
        K::NAME
    }
}

impl<H, K> Pattern<H, K> {
    /// Set the orientation.
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    /// Set the text direction.
    pub fn with_rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Allow or forbid multiple selection.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Start disabled or enabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the default key schemes.
    pub fn with_key_schemes(mut self, key_schemes: KeySchemes<Self>) -> Self {
        self.key_schemes = key_schemes;
        self
    }

    /// Replace the key schemes after construction.
    pub fn set_key_schemes(&mut self, key_schemes: KeySchemes<Self>) {
        self.key_schemes = key_schemes;
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the wrapped host, e.g. to change its items.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwrap the host, discarding the pattern state.
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H, K> std::fmt::Debug for Pattern<H, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pattern")
            .field("id", &self.uid.get())
            .field("disabled", &self.disabled)
            .field("horizontal", &self.horizontal)
            .field("rtl", &self.rtl)
            .field("active_descendant_id", &self.active_descendant_id)
            .field("multiple", &self.multiple)
            .field("key_schemes", &self.key_schemes)
            .finish_non_exhaustive()
    }
}

impl<H, K> HasId for Pattern<H, K> {
    fn id(&self) -> &str {
        self.uid.get()
    }
}

impl<H: HasLifecycle, K> HasLifecycle for Pattern<H, K> {
    fn setup(&mut self) {
        self.uid.assign();
        self.host.setup();
    }

    fn teardown(&mut self) {
        tracing::debug!("tearing down {}", self.uid.get());
        self.host.teardown();
    }
}

impl<H, K> CanBeDisabled for Pattern<H, K> {
    fn disabled(&self) -> bool {
        self.disabled
    }

    fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }
}

impl<H, K> HasOrientation for Pattern<H, K> {
    fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    fn set_horizontal(&mut self, horizontal: bool) {
        self.horizontal = horizontal;
    }
}

impl<H, K> AffectedByRtl for Pattern<H, K> {
    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }
}

impl<H: HasItems, K> HasItems for Pattern<H, K> {
    type Item = H::Item;

    fn items(&self) -> &[H::Item] {
        self.host.items()
    }

    fn items_mut(&mut self) -> &mut [H::Item] {
        self.host.items_mut()
    }
}

impl<H: HasItems, K> HasActiveDescendant for Pattern<H, K> {
    fn active_descendant_id(&self) -> &str {
        &self.active_descendant_id
    }

    fn set_active_descendant_id(&mut self, id: String) {
        self.active_descendant_id = id;
    }
}

impl<H, K> HasSelectedDescendant for Pattern<H, K>
where
    H: HasItems,
    H::Item: CanBeSelected,
{
    fn multiple(&self) -> bool {
        self.multiple
    }

    fn set_multiple(&mut self, multiple: bool) {
        self.multiple = multiple;
    }
}

impl<H, K> HasKeySchemes for Pattern<H, K> {
    fn key_schemes(&self) -> KeySchemes<Self> {
        self.key_schemes.clone()
    }
}

impl<H: CanBeFocused, K> CanBeFocused for Pattern<H, K> {
    fn is_focused(&self) -> bool {
        self.host.is_focused()
    }

    fn tab_index(&self) -> i32 {
        self.host.tab_index()
    }

    fn focus(&mut self) {
        self.host.focus();
    }

    fn blur(&mut self) {
        self.host.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use taro_core::testing::{key, TestHost, TestItem};
    use taro_core::{ListNavigation, PatternError, SequentialIds};

    struct Plain;

    impl<H: HasItems> PatternKind<H> for Plain {
        const NAME: &'static str = "plain";

        fn key_schemes() -> KeySchemes<Pattern<H, Self>> {
            KeySchemes::new().with(ListNavigation::default())
        }
    }

    fn host() -> TestHost {
        TestHost::new(vec![
            TestItem::new("a"),
            TestItem::new("b").with_disabled(true),
            TestItem::new("c"),
        ])
    }

    fn plain(ids: &IdSource) -> Pattern<TestHost, Plain> {
        Pattern::new(host(), ids)
    }

    #[test]
    fn id_is_assigned_on_setup_only() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids);
        assert_eq!(p.id(), "");
        p.setup();
        assert_eq!(p.id(), "cc0");
        p.setup();
        assert_eq!(p.id(), "cc0");
        assert_eq!(p.host().setup_calls, 2);
    }

    #[test]
    fn setups_draw_distinct_ids_in_order() {
        let ids = SequentialIds::shared();
        let mut patterns: Vec<_> = (0..4).map(|_| plain(&ids)).collect();
        for p in &mut patterns {
            p.setup();
        }
        let assigned: Vec<&str> = patterns.iter().map(|p| p.id()).collect();
        assert_eq!(assigned, vec!["cc0", "cc1", "cc2", "cc3"]);
    }

    #[test]
    fn teardown_reaches_host() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids);
        p.setup();
        p.teardown();
        assert_eq!(p.host().teardown_calls, 1);
        assert_eq!(p.id(), "cc0");
    }

    #[test]
    fn defaults_come_from_kind_and_options() {
        let ids = SequentialIds::shared();
        let p = plain(&ids);
        assert!(!p.is_horizontal());
        assert!(!p.is_rtl());
        assert!(!p.disabled());
        assert_eq!(p.kind_name(), "plain");
        assert_eq!(p.key_schemes().names(), vec!["ListNavigation"]);

        let opts = PatternOptions {
            horizontal: Some(true),
            rtl: true,
            disabled: true,
            ..PatternOptions::default()
        };
        let p: Pattern<TestHost, Plain> = Pattern::with_options(host(), &ids, opts);
        assert!(p.is_horizontal());
        assert!(p.is_rtl());
        assert!(p.disabled());
    }

    #[test]
    fn builders_override_defaults() {
        let ids = SequentialIds::shared();
        let p = plain(&ids)
            .with_horizontal(true)
            .with_rtl(true)
            .with_multiple(true)
            .with_disabled(true);
        assert!(p.is_horizontal());
        assert!(p.is_rtl());
        assert!(p.multiple());
        assert!(p.disabled());
    }

    #[test]
    fn items_come_from_host() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids);
        p.activate_first();
        p.activate_next();
        assert_eq!(p.active_descendant_id(), "c");

        p.host_mut().items.insert(0, TestItem::new("z"));
        assert_eq!(p.active_index(), Some(3));
        p.activate_next();
        assert_eq!(p.active_descendant_id(), "z");
    }

    #[test]
    fn selection_works_over_host_items() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids).with_multiple(true);
        p.activate_first();
        p.toggle_active_selection().unwrap();
        p.select("c").unwrap();
        assert_eq!(p.selected_ids(), vec!["a", "c"]);
        assert_eq!(
            p.select("nope"),
            Err(PatternError::UnknownItem("nope".into()))
        );
    }

    #[test]
    fn focus_is_delegated() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids);
        p.host_mut().tab_index = -1;
        p.focus();
        assert!(p.is_focused());
        assert!(p.host().focused);
        assert_eq!(p.tab_index(), -1);
        p.blur();
        assert!(!p.is_focused());
    }

    #[test]
    fn key_schemes_can_be_replaced() {
        let ids = SequentialIds::shared();
        let mut p = plain(&ids);
        p.activate_first();
        p.set_key_schemes(KeySchemes::new());
        assert!(!p.handle_key(&key(KeyCode::Down)).unwrap());
        assert_eq!(p.active_descendant_id(), "a");

        let skip_to_last = |w: &mut Pattern<TestHost, Plain>,
                            event: &crossterm::event::KeyEvent|
         -> Result<bool, PatternError> {
            if event.code != KeyCode::End {
                return Ok(false);
            }
            w.activate_last();
            Ok(true)
        };
        let mut p = p.with_key_schemes(KeySchemes::new().with(skip_to_last));
        assert!(p.handle_key(&key(KeyCode::End)).unwrap());
        assert_eq!(p.active_descendant_id(), "c");
    }

    #[test]
    fn into_host_returns_items() {
        let ids = SequentialIds::shared();
        let p = plain(&ids);
        assert_eq!(p.into_host().items.len(), 3);
    }
}
