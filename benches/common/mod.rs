use eclat::ObservationTable;
use rand::Rng;

/// Random market-basket observations.
///
/// Each transaction draws roughly `avg_transaction_size` item slots (between
/// half and one and a half times that), and each slot is filled with a
/// uniformly chosen item with probability `density`. Transactions that end
/// up empty still count towards support.
pub fn random_baskets(
    num_transactions: usize,
    num_items: usize,
    avg_transaction_size: usize,
    density: f64,
) -> ObservationTable<usize, usize> {
    let mut rng = rand::thread_rng();
    let mut table = ObservationTable::new("transaction", "item").with_transaction_count(num_transactions);

    let min_slots = avg_transaction_size / 2;
    let max_slots = (avg_transaction_size + avg_transaction_size / 2).min(num_items);
    for tx in 0..num_transactions {
        let slots = rng.gen_range(min_slots.min(max_slots)..=max_slots);
        for _ in 0..slots {
            if rng.gen_bool(density) {
                table.push(tx, rng.gen_range(0..num_items));
            }
        }
    }
    table
}
