use crate::core::{Category, Demo, Result, Transcript};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Packing {
    Wrapper,
    Bottle,
}

impl Packing {
    fn label(&self) -> &'static str {
        match self {
            Packing::Wrapper => "Wrapper",
            Packing::Bottle => "Bottle",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MealItem {
    pub name: String,
    pub price_cents: u32,
    pub packing: Packing,
}

impl MealItem {
    fn burger(name: &str, price_cents: u32) -> Self {
        Self {
            name: name.to_string(),
            price_cents,
            packing: Packing::Wrapper,
        }
    }

    fn drink(name: &str, price_cents: u32) -> Self {
        Self {
            name: name.to_string(),
            price_cents,
            packing: Packing::Bottle,
        }
    }
}

#[derive(Debug, Default)]
pub struct Meal {
    items: Vec<MealItem>,
}

impl Meal {
    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    pub fn cost_cents(&self) -> u32 {
        self.items.iter().map(|i| i.price_cents).sum()
    }
}

/// Stepwise meal assembly. Concrete builders decide which burger and drink
/// go into the meal; the director drives the steps in a fixed order.
pub trait MealBuilder {
    fn build_burger(&self, meal: &mut Meal);
    fn build_drink(&self, meal: &mut Meal);
}

pub struct VegMealBuilder;
pub struct NonVegMealBuilder;

impl MealBuilder for VegMealBuilder {
    fn build_burger(&self, meal: &mut Meal) {
        meal.items.push(MealItem::burger("Soya Burger", 340));
    }

    fn build_drink(&self, meal: &mut Meal) {
        meal.items.push(MealItem::drink("Pepsi", 45));
    }
}

impl MealBuilder for NonVegMealBuilder {
    fn build_burger(&self, meal: &mut Meal) {
        meal.items.push(MealItem::burger("Spicy Chicken Burger", 450));
    }

    fn build_drink(&self, meal: &mut Meal) {
        meal.items.push(MealItem::drink("Coke", 50));
    }
}

pub struct Director;

impl Director {
    pub fn construct(builder: &dyn MealBuilder) -> Meal {
        let mut meal = Meal::default();
        builder.build_burger(&mut meal);
        builder.build_drink(&mut meal);
        meal
    }
}

fn describe(label: &str, meal: &Meal, transcript: &mut Transcript) {
    transcript.note(label.to_string());
    for item in meal.items() {
        transcript.note(format!(
            "Item: {}, Packing: {}, Price: {}.{:02}",
            item.name,
            item.packing.label(),
            item.price_cents / 100,
            item.price_cents % 100
        ));
    }
    transcript.note(format!(
        "Total Cost: {}.{:02}",
        meal.cost_cents() / 100,
        meal.cost_cents() % 100
    ));
}

pub struct BuilderDemo;

impl Demo for BuilderDemo {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn summary(&self) -> &'static str {
        "Meals assembled step by step by a director"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let veg_meal = Director::construct(&VegMealBuilder);
        describe("Veg Meal", &veg_meal, transcript);

        let non_veg_meal = Director::construct(&NonVegMealBuilder);
        describe("Non Veg Meal", &non_veg_meal, transcript);

        Ok(())
    }
}
