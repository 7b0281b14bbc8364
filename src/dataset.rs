use std::io::BufRead;

use crate::{
    error::DatasetError,
    types::{ItemId, Transaction},
};

/// Largest item id the basket reader accepts. Mining allocates tables sized
/// by the item universe, so ids are bounded well below `usize::MAX`.
pub const MAX_ITEM_ID: ItemId = (1 << 24) - 1;

/// Reads a vote matrix: whitespace-separated integers, `n_attributes` per
/// record. Attribute `a` voting 0 becomes item `2a`, voting 1 becomes item
/// `2a + 1`; any other value is a missing vote and adds no item.
///
/// Returns the transactions and the item universe size `2 * n_attributes`.
pub fn read_vote_matrix<R: BufRead>(
    reader: R,
    n_attributes: usize,
) -> Result<(Vec<Transaction>, usize), DatasetError> {
    let mut transactions: Vec<Transaction> = Vec::new();
    let mut position = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let vote: i64 = parse_token(token, line_no)?;
            if n_attributes == 0 {
                continue;
            }

            let attribute = position % n_attributes;
            if attribute == 0 {
                transactions.push(Vec::with_capacity(n_attributes));
            }
            if let (0..=1, Some(transaction)) = (vote, transactions.last_mut()) {
                transaction.push(attribute * 2 + vote as usize);
            }
            position += 1;
        }
    }

    Ok((transactions, n_attributes * 2))
}

/// Reads one transaction per non-blank line of whitespace-separated item ids.
///
/// Returns the transactions and the item universe size (largest id + 1).
/// Ids above [`MAX_ITEM_ID`] are rejected.
pub fn read_baskets<R: BufRead>(reader: R) -> Result<(Vec<Transaction>, usize), DatasetError> {
    let mut transactions = Vec::new();
    let mut n_items = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let transaction = line
            .split_whitespace()
            .map(|token| parse_item(token, line_no))
            .collect::<Result<Transaction, _>>()?;
        if let Some(&max) = transaction.iter().max() {
            n_items = n_items.max(max + 1);
        }
        transactions.push(transaction);
    }

    Ok((transactions, n_items))
}

/// Reads one item label per line.
pub fn read_item_names<R: BufRead>(reader: R) -> Result<Vec<String>, DatasetError> {
    reader
        .lines()
        .map(|line| -> Result<String, DatasetError> { Ok(line?.trim_end().to_owned()) })
        .collect()
}

fn parse_item(token: &str, line_no: usize) -> Result<ItemId, DatasetError> {
    let item: ItemId = parse_token(token, line_no)?;
    if item > MAX_ITEM_ID {
        return Err(DatasetError::ItemIdTooLarge {
            line: line_no + 1,
            item,
            max: MAX_ITEM_ID,
        });
    }
    Ok(item)
}

fn parse_token<T: std::str::FromStr>(token: &str, line_no: usize) -> Result<T, DatasetError> {
    token.parse().map_err(|_| DatasetError::InvalidToken {
        line: line_no + 1,
        token: token.to_owned(),
    })
}
