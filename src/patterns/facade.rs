use crate::core::{Category, Demo, Result, Transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub restaurant: &'static str,
    pub dishes: Vec<&'static str>,
}

trait Hotel {
    fn menus(&self) -> Menu;
}

struct VegRestaurant;
struct NonVegRestaurant;
struct VegNonBothRestaurant;

impl Hotel for VegRestaurant {
    fn menus(&self) -> Menu {
        Menu {
            restaurant: "Veg Restaurant",
            dishes: vec!["Dal Makhani", "Veg Biryani"],
        }
    }
}

impl Hotel for NonVegRestaurant {
    fn menus(&self) -> Menu {
        Menu {
            restaurant: "Non-Veg Restaurant",
            dishes: vec!["Chicken Curry", "Fish Fry"],
        }
    }
}

impl Hotel for VegNonBothRestaurant {
    fn menus(&self) -> Menu {
        Menu {
            restaurant: "Both Restaurant",
            dishes: vec!["Dal Makhani", "Chicken Curry"],
        }
    }
}

/// The only type clients talk to; the restaurants stay private.
pub struct HotelKeeper;

impl HotelKeeper {
    pub fn veg_menu(&self) -> Menu {
        VegRestaurant.menus()
    }

    pub fn non_veg_menu(&self) -> Menu {
        NonVegRestaurant.menus()
    }

    pub fn both_menu(&self) -> Menu {
        VegNonBothRestaurant.menus()
    }
}

pub struct FacadeDemo;

impl Demo for FacadeDemo {
    fn name(&self) -> &'static str {
        "facade"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn summary(&self) -> &'static str {
        "Hotel keeper hiding the restaurants behind one counter"
    }

    fn run(&self, transcript: &mut Transcript) -> Result<()> {
        let keeper = HotelKeeper;

        for menu in [keeper.veg_menu(), keeper.non_veg_menu(), keeper.both_menu()] {
            transcript.note(format!(
                "{}: {}",
                menu.restaurant,
                menu.dishes.join(", ")
            ));
        }

        Ok(())
    }
}
