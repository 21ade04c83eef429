use crate::core::{Category, Demo, Result, Transcript};

/// The skeleton is fixed in `process`; variants only fill in the steps.
pub trait OrderProcess {
    fn select(&self, transcript: &mut Transcript);
    fn pay(&self, transcript: &mut Transcript);
    fn deliver(&self, transcript: &mut Transcript);

    fn gift_wrap(&self, transcript: &mut Transcript) {
        transcript.note("Gift wrap successful");
    }

    fn process(&self, gift: bool, transcript: &mut Transcript) {
        self.select(transcript);
        self.pay(transcript);
        if gift {
            self.gift_wrap(transcript);
        }
        self.deliver(transcript);
    }
}

pub struct NetOrder;
pub struct StoreOrder;

impl OrderProcess for NetOrder {
    fn select(&self, transcript: &mut Transcript) {
        transcript.note("Item added to online shopping cart");
        transcript.note("Get delivery address");
    }

    fn pay(&self, transcript: &mut Transcript) {
        transcript.note("Online payment through net banking or card");
    }

    fn deliver(&self, transcript: &mut Transcript) {
        transcript.note("Ship the item to the delivery address");
    }
}

impl OrderProcess for StoreOrder {
    fn select(&self, transcript: &mut Transcript) {
        transcript.note("Customer chooses the item from the shelf");
    }

    fn pay(&self, transcript: &mut Transcript) {
        transcript.note("Pays at the counter through cash or card");
    }

    fn deliver(&self, transcript: &mut Transcript) {
        transcript.note("Item handed over at the delivery counter");
    }
}

pub struct TemplateDemo;

impl Demo for TemplateDemo {
    fn name(&self) -> &'static str {
        "template"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn summary(&self) -> &'static str {
        "Order processing skeleton with online and store variants"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        transcript.note("Online order, gift wrapped:");
        NetOrder.process(true, transcript);

        transcript.note("Store order:");
        StoreOrder.process(false, transcript);

        Ok(())
    }
}
