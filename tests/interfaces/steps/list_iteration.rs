//! List iteration step definitions.

use std::ffi::{CStr, CString};
use std::ptr;

use cucumber::{given, then, when, World};
use gbind::ffi::{GList, GSList};
use gbind::{List, ListRef, SListRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    Doubly,
    Singly,
    Library,
}

/// Test context for list iteration scenarios.
///
/// Node chains are built and walked inside a single step; only the names
/// they carry and what the walk saw are kept between steps.
#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct ListWorld {
    layout: Layout,
    payloads: Vec<Option<CString>>,
    walked: Vec<String>,
    second_pass: Option<Vec<String>>,
    links_intact: Option<bool>,
}

impl ListWorld {
    fn new() -> Self {
        Self {
            layout: Layout::Doubly,
            payloads: Vec::new(),
            walked: Vec::new(),
            second_pass: None,
            links_intact: None,
        }
    }

    fn set_payloads(&mut self, layout: Layout, spec: &str) {
        self.layout = layout;
        self.payloads = parse_names(spec)
            .into_iter()
            .map(|name| (name != "-").then(|| CString::new(name).expect("nul in name")))
            .collect();
    }

    fn raw_payloads(&self) -> Vec<*mut std::ffi::c_void> {
        self.payloads
            .iter()
            .map(|p| p.as_ref().map_or(ptr::null_mut(), |s| s.as_ptr().cast_mut().cast()))
            .collect()
    }
}

fn parse_names(spec: &str) -> Vec<String> {
    spec.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

fn to_strings<'a>(iter: impl Iterator<Item = &'a CStr>) -> Vec<String> {
    iter.map(|s| s.to_string_lossy().into_owned()).collect()
}

fn link_glist(nodes: &mut [GList]) -> *mut GList {
    let base = nodes.as_mut_ptr();
    let len = nodes.len();
    for i in 0..len {
        unsafe {
            let node = base.add(i);
            (*node).next = if i + 1 < len { base.add(i + 1) } else { ptr::null_mut() };
            (*node).prev = if i > 0 { base.add(i - 1) } else { ptr::null_mut() };
        }
    }
    if len == 0 {
        ptr::null_mut()
    } else {
        base
    }
}

fn link_gslist(nodes: &mut [GSList]) -> *mut GSList {
    let base = nodes.as_mut_ptr();
    let len = nodes.len();
    for i in 0..len {
        unsafe {
            (*base.add(i)).next = if i + 1 < len { base.add(i + 1) } else { ptr::null_mut() };
        }
    }
    if len == 0 {
        ptr::null_mut()
    } else {
        base
    }
}

fn glist_intact(nodes: &[GList], payloads: &[*mut std::ffi::c_void]) -> bool {
    let base = nodes.as_ptr();
    nodes.iter().enumerate().all(|(i, node)| {
        let next = if i + 1 < nodes.len() { base.wrapping_add(i + 1) } else { ptr::null() };
        let prev = if i > 0 { base.wrapping_add(i - 1) } else { ptr::null() };
        node.data == payloads[i] && node.next.cast_const() == next && node.prev.cast_const() == prev
    })
}

// --- Given steps ---

#[given(expr = "a doubly linked list with payloads {string}")]
async fn given_doubly(world: &mut ListWorld, spec: String) {
    world.set_payloads(Layout::Doubly, &spec);
}

#[given(expr = "a singly linked list with payloads {string}")]
async fn given_singly(world: &mut ListWorld, spec: String) {
    world.set_payloads(Layout::Singly, &spec);
}

#[given(expr = "a library-built list with payloads {string}")]
async fn given_library(world: &mut ListWorld, spec: String) {
    world.set_payloads(Layout::Library, &spec);
    assert!(world.payloads.iter().all(Option::is_some), "the library cannot store null names here");
}

// --- When steps ---

#[when("the list is walked")]
async fn when_walked(world: &mut ListWorld) {
    let payloads = world.raw_payloads();
    match world.layout {
        Layout::Doubly => {
            let mut nodes: Vec<GList> = payloads
                .iter()
                .map(|&data| GList {
                    data,
                    next: ptr::null_mut(),
                    prev: ptr::null_mut(),
                })
                .collect();
            let head = link_glist(&mut nodes);
            world.walked = to_strings(unsafe { ListRef::<&CStr>::from_raw(head) }.iter());
            world.links_intact = Some(glist_intact(&nodes, &payloads));
        }
        Layout::Singly => {
            let mut nodes: Vec<GSList> = payloads
                .iter()
                .map(|&data| GSList {
                    data,
                    next: ptr::null_mut(),
                })
                .collect();
            let head = link_gslist(&mut nodes);
            world.walked = to_strings(unsafe { SListRef::<&CStr>::from_raw(head) }.iter());
        }
        Layout::Library => {
            let list: List<&CStr> = world
                .payloads
                .iter()
                .flatten()
                .map(CString::as_c_str)
                .collect();
            assert_eq!(list.len(), world.payloads.len());
            world.walked = to_strings(list.iter());
        }
    }
}

#[when("the list is walked twice with one iterator")]
async fn when_walked_twice(world: &mut ListWorld) {
    let payloads = world.raw_payloads();
    let mut nodes: Vec<GList> = payloads
        .iter()
        .map(|&data| GList {
            data,
            next: ptr::null_mut(),
            prev: ptr::null_mut(),
        })
        .collect();
    let head = link_glist(&mut nodes);
    let mut iter = unsafe { ListRef::<&CStr>::from_raw(head) }.iter();
    world.walked = to_strings(iter.by_ref());
    world.second_pass = Some(to_strings(iter));
}

// --- Then steps ---

#[then(expr = "the walk yields {string}")]
async fn then_yields(world: &mut ListWorld, expected: String) {
    assert_eq!(world.walked, parse_names(&expected));
}

#[then("the second pass yields nothing")]
async fn then_second_pass_empty(world: &mut ListWorld) {
    let second = world.second_pass.as_ref().expect("no second pass recorded");
    assert!(second.is_empty(), "second pass yielded {second:?}");
}

#[then("every node still links to its neighbours")]
async fn then_links_intact(world: &mut ListWorld) {
    assert_eq!(world.links_intact, Some(true));
}
