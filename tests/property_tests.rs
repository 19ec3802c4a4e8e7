//! Property-based tests for the linked list, hash table and binary search.

use chain_map::Error;
use chain_map::HashTable;
use chain_map::LinkedList;
use chain_map::ListNode;
use chain_map::binary_search;
use chain_map::hash;
use proptest::prelude::*;

fn small_values() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..8, 0..64)
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::char::range('A', 'z'), 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Reference model of the weave: `[1, m+1, 2, m+2, ...]` with `m = ceil(n/2)`.
fn woven<T: Clone>(values: &[T]) -> Vec<T> {
    let (first, second) = values.split_at(values.len().div_ceil(2));
    let mut out = Vec::with_capacity(values.len());
    for (i, value) in first.iter().enumerate() {
        out.push(value.clone());
        if let Some(partner) = second.get(i) {
            out.push(partner.clone());
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_append_reproduces_sequence(values in small_values()) {
        let mut list = LinkedList::new();
        for &value in &values {
            list.append_to_tail(ListNode::new(value));
        }
        prop_assert_eq!(list.len(), values.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn prop_prepend_reversed_reproduces_sequence(values in small_values()) {
        let mut list = LinkedList::new();
        for &value in values.iter().rev() {
            list.prepend_to_head(ListNode::new(value));
        }
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
    }

    #[test]
    fn prop_find_delete_duplicate_keeps_first_occurrences(values in small_values()) {
        let mut expected = Vec::new();
        for &value in &values {
            if !expected.contains(&value) {
                expected.push(value);
            }
        }

        let mut list: LinkedList<_> = values.iter().copied().collect();
        let removed = list.find_delete_duplicate();

        prop_assert_eq!(removed, values.len() - expected.len());
        prop_assert_eq!(list.len(), expected.len());
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_runner_weave_interleaves_halves(len in 0usize..64) {
        let values: Vec<_> = (1..=len).collect();
        let mut list: LinkedList<_> = values.iter().copied().collect();
        list.runner_weave();

        prop_assert_eq!(list.len(), len);
        prop_assert_eq!(list.nodes().count(), len);
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), woven(&values));
    }

    #[test]
    fn prop_find_k_to_last_matches_index(values in small_values(), k in 0usize..70) {
        let list: LinkedList<_> = values.iter().copied().collect();
        let result = list.find_k_to_last(k).map(|node| node.data);
        if k == 0 || k > values.len() {
            prop_assert_eq!(result, Err(Error::OutOfRange { k, len: values.len() }));
        } else {
            prop_assert_eq!(result, Ok(values[values.len() - k]));
        }
    }

    #[test]
    fn prop_find_k_to_last_rejects_large_k(values in small_values(), k in 70usize..) {
        let mut list: LinkedList<_> = values.iter().copied().collect();
        let len = values.len();
        prop_assert_eq!(
            list.find_k_to_last(k).map(|node| node.data),
            Err(Error::OutOfRange { k, len })
        );
        prop_assert_eq!(
            list.find_k_to_last_mut(k).map(|node| node.data),
            Err(Error::OutOfRange { k, len })
        );
    }

    #[test]
    fn prop_is_palindrome_matches_reverse(values in prop::collection::vec(0u8..3, 0..12)) {
        let list: LinkedList<_> = values.iter().copied().collect();
        let reversed: Vec<_> = values.iter().rev().copied().collect();
        prop_assert_eq!(list.is_palindrome(), values == reversed);
    }

    #[test]
    fn prop_mirrored_sequences_are_palindromes(
        half in prop::collection::vec(any::<u16>(), 0..20),
        middle in prop::option::of(any::<u16>()),
    ) {
        let mut values = half.clone();
        values.extend(middle);
        values.extend(half.iter().rev());
        let list: LinkedList<_> = values.into_iter().collect();
        prop_assert!(list.is_palindrome());
    }

    #[test]
    fn prop_hash_matches_recurrence(key in ".{0,16}") {
        let mut expected: i32 = 0;
        for unit in key.encode_utf16() {
            expected = expected.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
        prop_assert_eq!(hash(&key), expected);
        prop_assert_eq!(hash(&key), hash(&key.clone()));
    }

    #[test]
    fn prop_table_round_trip(pairs in prop::collection::vec((key_strategy(), any::<u32>()), 0..64)) {
        let mut table = HashTable::new();
        for (key, value) in &pairs {
            table.insert_node_into_map(key, *value);
        }

        prop_assert_eq!(table.len(), pairs.len());
        for (key, _) in &pairs {
            let expected: Vec<_> = pairs
                .iter()
                .filter(|(other, _)| hash(other) == hash(key))
                .map(|(other, value)| (other.clone(), *value))
                .collect();
            let actual: Vec<_> = table
                .get_bucket(key)
                .map(|entry| (entry.key.clone(), entry.value))
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn prop_entries_carry_their_hash(keys in prop::collection::vec(key_strategy(), 1..32)) {
        let mut table = HashTable::new();
        for key in &keys {
            table.insert_node_into_map(key, ());
        }
        for (bucket, list) in table.get_hash_map() {
            for entry in list {
                prop_assert_eq!(entry.bucket, *bucket);
                prop_assert_eq!(entry.hash_code, hash(&entry.key));
            }
        }
    }

    #[test]
    fn prop_binary_search_agrees_with_linear_scan(
        mut values in prop::collection::vec(any::<i16>(), 0..128),
        needle in any::<i16>(),
    ) {
        values.sort_unstable();
        values.dedup();
        let expected = values.iter().position(|&v| v == needle);
        prop_assert_eq!(binary_search(&values, &needle), expected);
    }
}

#[test]
fn test_colliding_keys_and_occupied_bucket() {
    let mut table = HashTable::new();
    table.insert_node_into_map("Aa", 1);
    table.insert_node_into_map("BB", 2);

    let values: Vec<_> = table.get_bucket("Aa").map(|entry| entry.value).collect();
    assert_eq!(values, [1, 2]);

    let list: LinkedList<_> = LinkedList::new();
    assert_eq!(
        table.insert_list_into_map("BB", list),
        Err(Error::BucketOccupied { bucket: 2112 })
    );
    assert_eq!(table.get_bucket("BB").count(), 2);
}
