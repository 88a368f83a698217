/// Views the admin app can show. Navigation is in-memory: the root component
/// swaps views when a child emits one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u64),
    Edit(u64),
}
