//! Name-ordered contact tree
//!
//! `ContactTree` is an unbalanced binary search tree keyed by the lowercase
//! form of each contact's name. It supports insert, exact-name lookup,
//! removal by in-order successor, and lazy in-order traversal.
//!
//! ## Ordering
//!
//! For every node, names in its left subtree compare strictly less than the
//! node's key and names in its right subtree compare greater than or equal.
//!
//! ## Duplicate names
//!
//! The tree never rejects a name. A second contact with an equal key lands in
//! the right subtree of the first. `find` and `remove` act on the first match
//! on the search path from the root, which is the earliest inserted of the
//! surviving duplicates. Uniqueness is a policy of the caller
//! (see `ContactService::add`).
//!
//! ## Known limitation
//!
//! There is no rebalancing. Shape depends only on insertion order, so
//! inserting names in sorted order degrades every operation to linear time
//! and recursion depth to the number of contacts.

use std::cmp::Ordering;
use std::fmt;

use crate::models::Contact;

/// A tree node owning one contact and its two subtrees
struct Node {
    /// Cached lowercase name
    key: String,
    contact: Contact,
    left: Link,
    right: Link,
}

type Link = Option<Box<Node>>;

impl Node {
    fn new(contact: Contact) -> Box<Self> {
        Box::new(Self {
            key: contact.sort_key(),
            contact,
            left: None,
            right: None,
        })
    }
}

/// Contacts ordered by case-insensitive name
#[derive(Default)]
pub struct ContactTree {
    root: Link,
    len: usize,
}

impl ContactTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored contacts
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no contacts
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a contact. Equal names are kept, to the right of existing ones.
    pub fn insert(&mut self, contact: Contact) {
        insert_at(&mut self.root, Node::new(contact));
        self.len += 1;
    }

    /// Find a contact by exact name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Contact> {
        let key = Contact::normalize_name(name);
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match key.as_str().cmp(node.key.as_str()) {
                Ordering::Equal => return Some(&node.contact),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Whether a contact with this name (ignoring case) exists
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Remove a contact by name, returning it
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        let key = Contact::normalize_name(name);
        let removed = remove_at(&mut self.root, &key)?;
        self.len -= 1;
        Some(removed)
    }

    /// Remove a contact by name, reporting whether one was removed
    pub fn delete(&mut self, name: &str) -> bool {
        self.remove(name).is_some()
    }

    /// In-order iterator over contacts, ascending by lowercase name
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left(self.root.as_deref());
        iter
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        fn height_of(link: &Link) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + height_of(&node.left).max(height_of(&node.right)),
            }
        }
        height_of(&self.root)
    }

    /// Drop every contact
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

fn insert_at(link: &mut Link, new_node: Box<Node>) {
    match link {
        None => *link = Some(new_node),
        Some(node) => {
            if new_node.key < node.key {
                insert_at(&mut node.left, new_node)
            } else {
                insert_at(&mut node.right, new_node)
            }
        }
    }
}

fn remove_at(link: &mut Link, key: &str) -> Option<Contact> {
    let node = link.as_mut()?;
    match key.cmp(node.key.as_str()) {
        Ordering::Less => remove_at(&mut node.left, key),
        Ordering::Greater => remove_at(&mut node.right, key),
        Ordering::Equal => {
            let mut target = link.take()?;
            let removed = match (target.left.take(), target.right.take()) {
                (None, right) => {
                    *link = right;
                    target.contact
                }
                (left, None) => {
                    *link = left;
                    target.contact
                }
                (Some(left), Some(right)) => {
                    // Replace with the in-order successor, unlinked from the right subtree
                    let mut right = Some(right);
                    let successor = take_leftmost(&mut right)?;
                    target.key = successor.key;
                    let removed = std::mem::replace(&mut target.contact, successor.contact);
                    target.left = Some(left);
                    target.right = right;
                    *link = Some(target);
                    removed
                }
            };
            Some(removed)
        }
    }
}

/// Unlink the leftmost node of a subtree, splicing its right child into its place
fn take_leftmost(link: &mut Link) -> Option<Box<Node>> {
    if link.as_ref()?.left.is_some() {
        return take_leftmost(&mut link.as_mut()?.left);
    }
    let mut leftmost = link.take()?;
    *link = leftmost.right.take();
    Some(leftmost)
}

impl fmt::Debug for ContactTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|c| c.name.as_str()))
            .finish()
    }
}

impl FromIterator<Contact> for ContactTree {
    /// Build a tree by replaying `insert` in iteration order
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Extend<Contact> for ContactTree {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        for contact in iter {
            self.insert(contact);
        }
    }
}

impl<'a> IntoIterator for &'a ContactTree {
    type Item = &'a Contact;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy in-order traversal of a [`ContactTree`]
///
/// Holds the chain of pending ancestors, so memory is bounded by tree height.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<&'a Contact> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.contact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
