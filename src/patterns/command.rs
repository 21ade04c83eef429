use crate::core::{Category, Demo, Result, Transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    pub symbol: String,
    pub quantity: u32,
}

impl Stock {
    pub fn new(symbol: &str, quantity: u32) -> Self {
        Self {
            symbol: symbol.to_string(),
            quantity,
        }
    }
}

/// A queued request, detached from the moment it gets executed.
pub trait OrderCommand {
    fn execute(&self) -> String;
}

pub struct BuyStock {
    stock: Stock,
}

pub struct SellStock {
    stock: Stock,
}

impl BuyStock {
    pub fn new(stock: Stock) -> Self {
        Self { stock }
    }
}

impl SellStock {
    pub fn new(stock: Stock) -> Self {
        Self { stock }
    }
}

impl OrderCommand for BuyStock {
    fn execute(&self) -> String {
        format!("Stock [ {} quantity {} ] bought", self.stock.symbol, self.stock.quantity)
    }
}

impl OrderCommand for SellStock {
    fn execute(&self) -> String {
        format!("Stock [ {} quantity {} ] sold", self.stock.symbol, self.stock.quantity)
    }
}

/// Invoker: collects commands and executes them in arrival order.
#[derive(Default)]
pub struct Broker {
    orders: Vec<Box<dyn OrderCommand>>,
}

impl Broker {
    pub fn take_order(&mut self, order: Box<dyn OrderCommand>) {
        self.orders.push(order);
    }

    pub fn pending(&self) -> usize {
        self.orders.len()
    }

    pub fn place_orders(&mut self) -> Vec<String> {
        self.orders.drain(..).map(|order| order.execute()).collect()
    }
}

pub struct CommandDemo;

impl Demo for CommandDemo {
    fn name(&self) -> &'static str {
        "command"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Buy/sell orders queued by a broker and executed later"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let mut broker = Broker::default();

        broker.take_order(Box::new(BuyStock::new(Stock::new("AAA", 100))));
        broker.take_order(Box::new(BuyStock::new(Stock::new("BBB", 200))));
        broker.take_order(Box::new(SellStock::new(Stock::new("AAA", 50))));

        transcript.note(format!("Orders queued: {}", broker.pending()));
        for line in broker.place_orders() {
            transcript.note(line);
        }
        transcript.note(format!("Orders left: {}", broker.pending()));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broker_executes_in_arrival_order() {
        let mut broker = Broker::default();
        broker.take_order(Box::new(SellStock::new(Stock::new("XYZ", 10))));
        broker.take_order(Box::new(BuyStock::new(Stock::new("XYZ", 20))));

        assert_eq!(
            broker.place_orders(),
            vec![
                "Stock [ XYZ quantity 10 ] sold",
                "Stock [ XYZ quantity 20 ] bought"
            ]
        );
    }

    #[test]
    fn test_placing_drains_the_queue() {
        let mut broker = Broker::default();
        broker.take_order(Box::new(BuyStock::new(Stock::new("AAA", 1))));
        assert_eq!(broker.pending(), 1);
        broker.place_orders();
        assert_eq!(broker.pending(), 0);
    }

    #[test]
    fn test_demo_reports_queue_sizes() {
        let mut transcript = Transcript::new();
        CommandDemo.run(&mut transcript).unwrap();
        assert!(transcript.contains("Orders queued: 3"));
        assert!(transcript.contains("Orders left: 0"));
    }
}
