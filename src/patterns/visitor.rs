use crate::core::{Category, Demo, Result, Transcript};

/// Items ship with a price and weight; postage rules live in the visitors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Item {
    Book { price: f64, weight: f64 },
    Cd { price: f64, weight: f64 },
    Dvd { price: f64, weight: f64 },
}

pub trait PostageVisitor {
    fn visit_book(&mut self, price: f64, weight: f64);
    fn visit_cd(&mut self, price: f64, weight: f64);
    fn visit_dvd(&mut self, price: f64, weight: f64);
    fn total_postage(&self) -> f64;
}

impl Item {
    pub fn accept(&self, visitor: &mut dyn PostageVisitor) {
        match *self {
            Item::Book { price, weight } => visitor.visit_book(price, weight),
            Item::Cd { price, weight } => visitor.visit_cd(price, weight),
            Item::Dvd { price, weight } => visitor.visit_dvd(price, weight),
        }
    }
}

/// Free postage above the price threshold; otherwise weight-based rates.
#[derive(Default)]
pub struct UsPostageVisitor {
    total: f64,
}

impl PostageVisitor for UsPostageVisitor {
    fn visit_book(&mut self, price: f64, weight: f64) {
        if price < 20.0 {
            self.total += weight * 2.0;
        }
    }

    fn visit_cd(&mut self, price: f64, weight: f64) {
        if price < 20.0 {
            self.total += weight * 2.5;
        }
    }

    fn visit_dvd(&mut self, price: f64, weight: f64) {
        if price < 20.0 {
            self.total += weight * 3.0;
        }
    }

    fn total_postage(&self) -> f64 {
        self.total
    }
}

/// Same structure, higher threshold, doubled rates.
#[derive(Default)]
pub struct SouthAmericaPostageVisitor {
    total: f64,
}

impl PostageVisitor for SouthAmericaPostageVisitor {
    fn visit_book(&mut self, price: f64, weight: f64) {
        if price < 30.0 {
            self.total += weight * 2.0 * 2.0;
        }
    }

    fn visit_cd(&mut self, price: f64, weight: f64) {
        if price < 30.0 {
            self.total += weight * 2.5 * 2.0;
        }
    }

    fn visit_dvd(&mut self, price: f64, weight: f64) {
        if price < 30.0 {
            self.total += weight * 3.0 * 2.0;
        }
    }

    fn total_postage(&self) -> f64 {
        self.total
    }
}

pub fn total_postage(cart: &[Item], visitor: &mut dyn PostageVisitor) -> f64 {
    for item in cart {
        item.accept(visitor);
    }
    visitor.total_postage()
}

pub struct VisitorDemo;

impl Demo for VisitorDemo {
    fn name(&self) -> &'static str {
        "visitor"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Regional postage visitors totaling a shopping cart"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let cart = [
            Item::Book {
                price: 10.0,
                weight: 10.0,
            },
            Item::Cd {
                price: 20.0,
                weight: 20.0,
            },
            Item::Book {
                price: 30.0,
                weight: 30.0,
            },
            Item::Dvd {
                price: 40.0,
                weight: 40.0,
            },
        ];

        let us = total_postage(&cart, &mut UsPostageVisitor::default());
        transcript.note(format!("US cost: {}", us));

        let sa = total_postage(&cart, &mut SouthAmericaPostageVisitor::default());
        transcript.note(format!("South America cost: {}", sa));

        Ok(())
    }
}
