#![deny(warnings)]
#![cfg_attr(test, deny(warnings))]

//! A singly-linked list whose nodes are only reachable through the list that
//! owns them.
//!
//! [`Node`] has no readable or writable surface outside this crate: callers
//! can build one to seed a [`List`], get one back from
//! [`List::remove_at_front`], and drop it. Everything else goes through the
//! list.

use std::fmt;
use std::io;

use log::{debug, trace};
use thiserror::Error;

/// Rendered by [`List::write_to`] when the list has no nodes.
pub const EMPTY_MARKER: &str = "<EMPTY>";

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ListError {
    #[error("list is empty")]
    Empty,
}

/// One element of a [`List`] chain.
pub struct Node<T> {
    payload: Option<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Node<T> {
        Node {
            payload: Some(value),
            next: None,
        }
    }

    fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }

    fn set_next(&mut self, next: Link<T>) {
        self.next = next;
    }

    fn take_next(&mut self) -> Link<T> {
        self.next.take()
    }
}

impl<T> Default for Node<T> {
    fn default() -> Self {
        Node {
            payload: None,
            next: None,
        }
    }
}

impl<T> Drop for Node<T> {
    // A node handed out by a list never carries a chain, but unlink
    // iteratively anyway so a stray chain can't blow the stack.
    fn drop(&mut self) {
        let mut link = self.take_next();
        while let Some(mut node) = link {
            link = node.take_next();
        }
    }
}

/// The operations every list variant offers. `List` is the singly-linked one.
///
/// The trait is object safe; dropping a `Box<dyn FrontList<T>>` runs the
/// variant's own teardown.
pub trait FrontList<T> {
    fn insert_at_front(&mut self, value: T);

    /// Detaches the head node and hands it to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    fn remove_at_front(&mut self) -> Node<T>;

    /// Removes the head node and destroys it along with its payload.
    fn delete_at_front(&mut self) {
        drop(self.remove_at_front());
    }

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Writes the payloads head first, space separated, newline terminated.
    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display;

    fn print(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle)
    }
}

pub struct List<T> {
    head: Link<T>,
    len: usize,
}

impl<T> List<T> {
    pub fn new() -> List<T> {
        List { head: None, len: 0 }
    }

    /// Creates a list owning exactly `node`.
    pub fn from_node(mut node: Node<T>) -> List<T> {
        drop(node.take_next());
        List {
            head: Some(Box::new(node)),
            len: 1,
        }
    }

    pub fn insert_at_front(&mut self, value: T) {
        let mut node = Box::new(Node::new(value));
        node.set_next(self.head.take());
        self.head = Some(node);
        self.len += 1;
        trace!("inserted node, list length {}", self.len);
    }

    /// Detaches the head node and returns it with its link cleared.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty. Check [`is_empty`](Self::is_empty) first
    /// or use [`try_remove_at_front`](Self::try_remove_at_front).
    pub fn remove_at_front(&mut self) -> Node<T> {
        match self.try_remove_at_front() {
            Ok(node) => node,
            Err(_) => panic!("remove_at_front called on an empty list"),
        }
    }

    pub fn try_remove_at_front(&mut self) -> Result<Node<T>, ListError> {
        let mut node = self.head.take().ok_or(ListError::Empty)?;
        self.head = node.take_next();
        self.len -= 1;
        trace!("removed node, list length {}", self.len);
        Ok(*node)
    }

    pub fn delete_at_front(&mut self) {
        drop(self.remove_at_front());
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return writeln!(out, "{EMPTY_MARKER}");
        }

        let mut cursor = self.head.as_deref();
        let mut first = true;
        while let Some(node) = cursor {
            // Sentinel nodes carry no payload and render as nothing.
            if let Some(value) = node.payload() {
                if !first {
                    write!(out, " ")?;
                }
                write!(out, "{value}")?;
                first = false;
            }
            cursor = node.next();
        }
        writeln!(out)
    }

    pub fn print(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        FrontList::print(self)
    }
}

impl<T> FrontList<T> for List<T> {
    fn insert_at_front(&mut self, value: T) {
        List::insert_at_front(self, value)
    }

    fn remove_at_front(&mut self) -> Node<T> {
        List::remove_at_front(self)
    }

    fn is_empty(&self) -> bool {
        List::is_empty(self)
    }

    fn len(&self) -> usize {
        List::len(self)
    }

    fn write_to(&self, out: &mut dyn io::Write) -> io::Result<()>
    where
        T: fmt::Display,
    {
        List::write_to(self, out)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        if !self.is_empty() {
            debug!("tearing down list with {} nodes", self.len);
        }
        while !self.is_empty() {
            self.delete_at_front();
        }
    }
}
