use std::cmp::Ordering;
use std::fmt;
use std::mem;
use tracing::debug;

use crate::error::{BookingError, BookingResult};
use crate::models::{SeatEntry, SeatId};

type Link = Option<Box<SeatNode>>;

struct SeatNode {
    entry: SeatEntry,
    left: Link,
    right: Link,
}

impl SeatNode {
    fn new(id: SeatId) -> Self {
        Self {
            entry: SeatEntry::new(id),
            left: None,
            right: None,
        }
    }
}

/// Места одного сеанса в двоичном дереве поиска по номеру места.
///
/// Каждый узел владеет своими детьми, обратных ссылок нет: все обходы идут
/// сверху вниз. Дерево не балансируется, поэтому при вставке номеров по
/// возрастанию оно вырождается в список и операции становятся O(n).
#[derive(Default)]
pub struct SeatIndex {
    root: Link,
    len: usize,
    seat_limit: Option<usize>,
}

impl SeatIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Индекс, который принимает не больше `limit` мест
    pub fn with_seat_limit(limit: usize) -> Self {
        Self {
            root: None,
            len: 0,
            seat_limit: Some(limit),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn seat_limit(&self) -> Option<usize> {
        self.seat_limit
    }

    /// Добавить свободное место. Повторный номер отклоняется с `DuplicateKey`.
    pub fn add(&mut self, id: SeatId) -> BookingResult<()> {
        if let Some(capacity) = self.seat_limit {
            if self.len >= capacity {
                return Err(BookingError::CapacityExceeded { capacity });
            }
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match id.cmp(&node.entry.id) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(BookingError::DuplicateKey(id)),
            };
        }
        *link = Some(Box::new(SeatNode::new(id)));
        self.len += 1;

        debug!(seat_id = id, len = self.len, "seat added");
        Ok(())
    }

    pub fn find(&self, id: SeatId) -> BookingResult<&SeatEntry> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            link = match id.cmp(&node.entry.id) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Ok(&node.entry),
            };
        }
        Err(BookingError::NotFound(id))
    }

    pub fn contains(&self, id: SeatId) -> bool {
        self.find(id).is_ok()
    }

    pub fn book(&mut self, id: SeatId) -> BookingResult<()> {
        let entry = self.find_mut(id).ok_or(BookingError::NotFound(id))?;
        if entry.booked {
            return Err(BookingError::AlreadyBooked(id));
        }
        entry.booked = true;

        debug!(seat_id = id, "seat booked");
        Ok(())
    }

    /// Удалить место из индекса независимо от брони
    pub fn remove(&mut self, id: SeatId) -> BookingResult<SeatEntry> {
        let removed = Self::remove_from(&mut self.root, id).ok_or(BookingError::NotFound(id))?;
        self.len -= 1;

        debug!(seat_id = id, len = self.len, "seat removed");
        Ok(removed)
    }

    /// Отменить бронь. Место при этом удаляется из индекса целиком, и чтобы
    /// снова его продавать, его нужно заново добавить через `add`.
    pub fn cancel(&mut self, id: SeatId) -> BookingResult<SeatEntry> {
        if !self.find(id)?.booked {
            return Err(BookingError::NotBooked(id));
        }
        self.remove(id)
    }

    /// Обход по возрастанию номеров. Каждый вызов начинает обход заново.
    pub fn iter(&self) -> SeatIter<'_> {
        let mut iter = SeatIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn available_count(&self) -> usize {
        self.iter().filter(|seat| !seat.booked).count()
    }

    pub fn booked_count(&self) -> usize {
        self.iter().filter(|seat| seat.booked).count()
    }

    /// Высота дерева (пустое дерево имеет высоту 0)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&SeatNode, usize)> = self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }
        height
    }

    fn find_mut(&mut self, id: SeatId) -> Option<&mut SeatEntry> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match id.cmp(&node.entry.id) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(&mut node.entry),
            }
        }
        None
    }

    // Спуск циклом: вырожденное дерево может быть глубиной в десятки тысяч
    // узлов
    fn remove_from(mut link: &mut Link, id: SeatId) -> Option<SeatEntry> {
        loop {
            let ordering = id.cmp(&link.as_ref()?.entry.id);
            link = match ordering {
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
                Ordering::Equal => return Self::unlink(link),
            };
        }
    }

    // Узел на месте `link` заменяется правым ребёнком, левым ребёнком или
    // минимальным узлом правого поддерева (преемником)
    fn unlink(link: &mut Link) -> Option<SeatEntry> {
        let mut node = link.take()?;
        match (node.left.take(), node.right.take()) {
            (None, right) => {
                *link = right;
                Some(node.entry)
            }
            (Some(left), None) => {
                *link = Some(left);
                Some(node.entry)
            }
            (left, mut right) => {
                let successor = Self::take_min(&mut right)?;
                let removed = mem::replace(&mut node.entry, successor);
                node.left = left;
                node.right = right;
                *link = Some(node);
                Some(removed)
            }
        }
    }

    // Самый левый узел поддерева: у него нет левого ребёнка, его место
    // занимает правый
    fn take_min(mut link: &mut Link) -> Option<SeatEntry> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        *link = node.right;
        Some(node.entry)
    }

    #[cfg(test)]
    fn root_id(&self) -> Option<SeatId> {
        self.root.as_ref().map(|node| node.entry.id)
    }
}

// Обход итератором, а не рекурсией по узлам
impl fmt::Debug for SeatIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeatIndex")
            .field("len", &self.len)
            .field("seat_limit", &self.seat_limit)
            .field("seats", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

// Вырожденное дерево - длинная цепочка Box, рекурсивный drop по ней
// переполнит стек
impl Drop for SeatIndex {
    fn drop(&mut self) {
        let mut stack: Vec<Box<SeatNode>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

pub struct SeatIter<'a> {
    stack: Vec<&'a SeatNode>,
}

impl<'a> SeatIter<'a> {
    fn push_left_spine(&mut self, mut link: Option<&'a SeatNode>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for SeatIter<'a> {
    type Item = &'a SeatEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.entry)
    }
}

impl<'a> IntoIterator for &'a SeatIndex {
    type Item = &'a SeatEntry;
    type IntoIter = SeatIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
