//! Release discipline step definitions.

use std::ptr::{self, NonNull};
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use cucumber::{given, then, when, World};
use gbind::{Borrowed, Discipline, HandleError, List, ListRef, Owned};
use gbind_core::{resource, Resource, ThreadSafe};

/// Foreign resource stand-in that counts the calls made on it
#[derive(Debug, Default)]
pub struct Mock {
    refs: AtomicI32,
    retains: AtomicU32,
    releases: AtomicU32,
    frees: AtomicU32,
}

impl Mock {
    fn calls(&self) -> u32 {
        self.retains.load(Ordering::SeqCst)
            + self.releases.load(Ordering::SeqCst)
            + self.frees.load(Ordering::SeqCst)
    }
}

unsafe extern "C" fn mock_ref(raw: *mut Mock) -> *mut Mock {
    (*raw).refs.fetch_add(1, Ordering::SeqCst);
    (*raw).retains.fetch_add(1, Ordering::SeqCst);
    raw
}

unsafe extern "C" fn mock_unref(raw: *mut Mock) {
    (*raw).refs.fetch_sub(1, Ordering::SeqCst);
    (*raw).releases.fetch_add(1, Ordering::SeqCst);
}

unsafe extern "C" fn mock_free(raw: *mut Mock) {
    (*raw).frees.fetch_add(1, Ordering::SeqCst);
}

resource! {
    pub enum Shared: refcounted(Mock) {
        ref = mock_ref,
        unref = mock_unref,
    }
}

resource! {
    pub enum Unique: transferred(Mock) {
        free = mock_free,
    }
}

resource! {
    pub enum Fixed: uncounted(Mock)
}

// Mock counters are atomics.
unsafe impl ThreadSafe for Shared {}
unsafe impl ThreadSafe for Unique {}
unsafe impl ThreadSafe for Fixed {}

#[derive(Debug)]
enum Owner {
    Shared(Owned<Shared>),
    Unique(Owned<Unique>),
    Fixed(Owned<Fixed>),
}

/// Test context for release discipline scenarios.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct OwnershipWorld {
    // Owners are declared first so they drop before the mock they point at.
    owners: Vec<Owner>,
    discipline: Option<Discipline>,
    last_error: Option<HandleError>,
    mock: Box<Mock>,
}

impl OwnershipWorld {
    fn new() -> Self {
        Self {
            owners: Vec::new(),
            discipline: None,
            last_error: None,
            mock: Box::default(),
        }
    }

    fn raw(&self) -> NonNull<Mock> {
        NonNull::from(&*self.mock)
    }

    fn shared_owner(&self) -> &Owned<Shared> {
        match self.owners.first() {
            Some(Owner::Shared(owner)) => owner,
            other => panic!("expected a reference-counted owner, found {other:?}"),
        }
    }
}

// --- Given steps ---

#[given(expr = "a reference-counted resource with {int} reference(s)")]
async fn given_refcounted(world: &mut OwnershipWorld, refs: i32) {
    world.mock.refs.store(refs, Ordering::SeqCst);
    world.discipline = Some(Shared::DISCIPLINE);
}

#[given("a transferred resource")]
async fn given_transferred(world: &mut OwnershipWorld) {
    world.discipline = Some(Unique::DISCIPLINE);
}

#[given("an uncounted resource")]
async fn given_uncounted(world: &mut OwnershipWorld) {
    world.discipline = Some(Fixed::DISCIPLINE);
}

#[given("an owner adopting it")]
async fn given_owner(world: &mut OwnershipWorld) {
    let raw = world.raw();
    let owner = unsafe {
        match world.discipline.expect("no resource declared") {
            Discipline::RefCounted => Owner::Shared(Owned::adopt(raw)),
            Discipline::Transferred => Owner::Unique(Owned::adopt(raw)),
            Discipline::Uncounted => Owner::Fixed(Owned::adopt(raw)),
        }
    };
    world.owners.push(owner);
}

// --- When steps ---

#[when(expr = "the owner is cloned {int} time(s)")]
async fn when_cloned(world: &mut OwnershipWorld, times: usize) {
    let clones: Vec<Owner> = (0..times)
        .map(|_| Owner::Shared(world.shared_owner().clone()))
        .collect();
    world.owners.extend(clones);
}

#[when(expr = "the owner is moved {int} time(s)")]
async fn when_moved(world: &mut OwnershipWorld, times: usize) {
    let mut owner = world.owners.pop().expect("no owner to move");
    for _ in 0..times {
        owner = *Box::new(owner);
    }
    world.owners.push(owner);
}

#[when("every owner is dropped")]
async fn when_all_dropped(world: &mut OwnershipWorld) {
    world.owners.clear();
}

#[when("the owner gives its claim back")]
async fn when_into_raw(world: &mut OwnershipWorld) {
    let raw = match world.owners.pop() {
        Some(Owner::Unique(owner)) => owner.into_raw(),
        other => panic!("expected a transferred owner, found {other:?}"),
    };
    assert_eq!(raw, world.raw());
}

#[when("a view is retained into an owner")]
async fn when_view_retained(world: &mut OwnershipWorld) {
    let view = unsafe { Borrowed::<Shared>::from_non_null(world.raw()) };
    world.owners.push(Owner::Shared(view.retain()));
}

#[when(expr = "a list holding it {int} time(s) is collected into owners")]
async fn when_list_collected(world: &mut OwnershipWorld, times: usize) {
    let view = unsafe { Borrowed::<Shared>::from_non_null(world.raw()) };
    let list: List<Borrowed<'_, Shared>> = std::iter::repeat(view).take(times).collect();
    let owners: Vec<Owner> = unsafe { ListRef::<Owned<Shared>>::from_raw(list.as_list_ref().as_ptr()) }
        .iter()
        .map(Owner::Shared)
        .collect();
    drop(list);
    world.owners.extend(owners);
}

#[when(expr = "{int} views are taken and dropped")]
async fn when_views(world: &mut OwnershipWorld, count: usize) {
    let raw = world.raw();
    for _ in 0..count {
        let view = unsafe { Borrowed::<Shared>::from_non_null(raw) };
        let copy = view;
        assert_eq!(copy, view);
    }
}

#[when("a null transferred resource is adopted")]
async fn when_null_adopted(world: &mut OwnershipWorld) {
    world.last_error = unsafe { Owned::<Unique>::try_adopt(ptr::null_mut()) }.err();
}

// --- Then steps ---

#[then(expr = "the resource has {int} reference(s)")]
async fn then_refs(world: &mut OwnershipWorld, refs: i32) {
    assert_eq!(world.mock.refs.load(Ordering::SeqCst), refs);
}

#[then(expr = "{int} retain(s) were/was made")]
async fn then_retains(world: &mut OwnershipWorld, retains: u32) {
    assert_eq!(world.mock.retains.load(Ordering::SeqCst), retains);
}

#[then(expr = "{int} release(s) were/was made")]
async fn then_releases(world: &mut OwnershipWorld, releases: u32) {
    assert_eq!(world.mock.releases.load(Ordering::SeqCst), releases);
}

#[then(expr = "the resource was freed {int} time(s)")]
async fn then_freed(world: &mut OwnershipWorld, frees: u32) {
    assert_eq!(world.mock.frees.load(Ordering::SeqCst), frees);
}

#[then("no foreign calls were made")]
async fn then_no_calls(world: &mut OwnershipWorld) {
    assert_eq!(world.mock.calls(), 0);
}

#[then(expr = "adoption fails naming the kind {string}")]
async fn then_adoption_fails(world: &mut OwnershipWorld, kind: String) {
    let err = world.last_error.clone().expect("adoption did not fail");
    assert_eq!(err, HandleError::Null { kind: Unique::NAME });
    assert_eq!(Unique::NAME, kind);
    assert!(err.to_string().contains(&kind));
}
