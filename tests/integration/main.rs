//! Integration tests for brewcart

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const MENU: &str = r#"[
        {"id": 1, "name": "Cappuccino", "price": 200, "image": "/img/1.jpg",
         "category": "coffee", "description": "Espresso with milk foam",
         "weight": 250, "calories": 120, "isNew": false, "isPopular": true},
        {"id": 2, "name": "Green tea", "price": 150, "image": "/img/2.jpg",
         "category": "tea", "description": "Sencha", "weight": 300,
         "calories": 0, "isNew": true, "isPopular": false},
        {"id": 3, "name": "Cheesecake", "price": 900, "oldPrice": 1000,
         "image": "/img/3.jpg", "category": "desserts",
         "description": "New York style", "weight": 150, "calories": 420,
         "isNew": false, "isPopular": true}
    ]"#;

    /// Isolated config, state dir and catalog per test
    struct Shop {
        dir: TempDir,
    }

    impl Shop {
        fn new() -> Self {
            let dir = TempDir::new().unwrap();
            std::fs::write(dir.path().join("menu.json"), MENU).unwrap();
            Self { dir }
        }

        fn state_dir(&self) -> PathBuf {
            self.dir.path().join("state")
        }

        fn slot(&self) -> PathBuf {
            self.state_dir().join("cart").join("coffeeShopCart.json")
        }

        fn bare(&self) -> Command {
            let mut cmd = cargo_bin_cmd!("brewcart");
            cmd.env("BREWCART_CONFIG", self.dir.path().join("config.toml"))
                .env("BREWCART_STATE_DIR", self.state_dir())
                .env_remove("BREWCART_CATALOG");
            cmd
        }

        fn cmd(&self) -> Command {
            let mut cmd = self.bare();
            cmd.env("BREWCART_CATALOG", self.dir.path().join("menu.json"));
            cmd
        }

        fn cart_json(&self) -> serde_json::Value {
            let output = self.cmd().args(["cart", "--format", "json"]).output().unwrap();
            assert!(output.status.success());
            serde_json::from_slice(&output.stdout).unwrap()
        }

        fn path(&self) -> &Path {
            self.dir.path()
        }
    }

    #[test]
    fn help_displays() {
        Shop::new()
            .bare()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("coffee-shop storefront"));
    }

    #[test]
    fn version_displays() {
        Shop::new()
            .bare()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("brewcart"));
    }

    #[test]
    fn menu_filters_and_sorts() {
        let shop = Shop::new();
        shop.cmd()
            .args(["menu", "--sort", "price-asc", "--format", "plain"])
            .assert()
            .success()
            .stdout("2\tGreen tea\n1\tCappuccino\n3\tCheesecake\n");

        shop.cmd()
            .args(["menu", "--category", "tea", "--format", "plain"])
            .assert()
            .success()
            .stdout("2\tGreen tea\n");

        shop.cmd()
            .args(["menu", "--search", "MILK", "--format", "plain"])
            .assert()
            .success()
            .stdout("1\tCappuccino\n");
    }

    #[test]
    fn categories_list() {
        Shop::new()
            .cmd()
            .arg("categories")
            .assert()
            .success()
            .stdout("all\ncoffee\ntea\ndesserts\n");
    }

    #[test]
    fn show_product() {
        Shop::new()
            .cmd()
            .args(["show", "3"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Cheesecake"))
            .stdout(predicate::str::contains("420 kcal"));
    }

    #[test]
    fn cart_persists_between_runs() {
        let shop = Shop::new();
        shop.cmd().args(["add", "1"]).assert().success();
        shop.cmd().args(["add", "1"]).assert().success();
        shop.cmd()
            .args(["add", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cart: 3"));

        let cart = shop.cart_json();
        assert_eq!(cart["totalItems"], 3);
        assert_eq!(cart["totalPrice"], 550);
        assert_eq!(cart["items"][0]["id"], 1);
        assert_eq!(cart["items"][0]["quantity"], 2);
        assert_eq!(cart["items"][1]["id"], 2);
        assert_eq!(cart["delivery"]["fee"], 300);
        assert_eq!(cart["delivery"]["remainingForFree"], 450);
        assert!(shop.slot().exists());

        shop.cmd().args(["set", "1", "0"]).assert().success();
        let cart = shop.cart_json();
        assert_eq!(cart["items"][0]["quantity"], 1);
        assert_eq!(cart["totalItems"], 2);
    }

    #[test]
    fn add_ignores_requested_quantity() {
        let shop = Shop::new();
        shop.cmd()
            .args(["add", "1", "--quantity", "4"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cart: 1"));
        assert_eq!(shop.cart_json()["totalItems"], 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let shop = Shop::new();
        shop.cmd().args(["add", "2"]).assert().success();
        let before = shop.cart_json();

        shop.cmd()
            .args(["remove", "42"])
            .assert()
            .success()
            .stdout(predicate::str::contains("not in the cart"));
        assert_eq!(shop.cart_json(), before);
    }

    #[test]
    fn corrupt_slot_reads_as_empty() {
        let shop = Shop::new();
        std::fs::create_dir_all(shop.slot().parent().unwrap()).unwrap();
        std::fs::write(shop.slot(), "{ not json").unwrap();

        shop.cmd()
            .arg("badge")
            .assert()
            .success()
            .stdout("cart: 0\n");
    }

    #[test]
    fn clear_empties_cart() {
        let shop = Shop::new();
        shop.cmd().args(["add", "1"]).assert().success();
        shop.cmd().args(["clear", "--yes"]).assert().success();

        let cart = shop.cart_json();
        assert_eq!(cart["items"], serde_json::json!([]));
        assert_eq!(cart["totalItems"], 0);
        assert_eq!(cart["totalPrice"], 0);
    }

    #[test]
    fn unknown_product_fails() {
        Shop::new()
            .cmd()
            .args(["add", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Product not found: 99"));
    }

    #[test]
    fn missing_catalog_fails_with_hint() {
        Shop::new()
            .bare()
            .arg("menu")
            .assert()
            .failure()
            .stderr(predicate::str::contains("No catalog configured"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn checkout_empty_cart_fails() {
        Shop::new()
            .cmd()
            .args(["checkout", "--name", "Anna", "--phone", "1", "--address", "Main 1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Cart is empty"));
    }

    #[test]
    fn checkout_requires_fields() {
        let shop = Shop::new();
        shop.cmd().args(["add", "1"]).assert().success();

        shop.cmd()
            .args(["checkout", "--phone", "1", "--address", "Main 1", "--yes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("name is required"));
        assert_eq!(shop.cart_json()["totalItems"], 1);
    }

    #[test]
    fn checkout_places_order() {
        let shop = Shop::new();
        shop.cmd().args(["add", "3"]).assert().success();
        shop.cmd().args(["add", "1"]).assert().success();

        shop.cmd()
            .args([
                "checkout", "--name", "Anna", "--phone", "+7 900", "--address", "Main 1", "--yes",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Order placed"))
            .stdout(predicate::str::contains("1100 ₽"));

        assert_eq!(shop.cart_json()["totalItems"], 0);

        let log = std::fs::read_to_string(shop.state_dir().join("orders.log")).unwrap();
        let order: serde_json::Value = serde_json::from_str(log.trim()).unwrap();
        assert_eq!(order["quote"]["fee"], 0);
        assert_eq!(order["customer"]["name"], "Anna");
    }

    #[test]
    fn config_path() {
        let shop = Shop::new();
        shop.bare()
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_set_then_show() {
        let shop = Shop::new();
        shop.bare()
            .args(["config", "set", "delivery.fee", "250"])
            .assert()
            .success();

        shop.bare()
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[delivery]"))
            .stdout(predicate::str::contains("fee = 250"));
        assert!(shop.path().join("config.toml").exists());
    }

    #[test]
    fn config_set_rejects_escaping_storage_key() {
        let shop = Shop::new();
        shop.bare()
            .args(["config", "set", "cart.storage_key", "../../x"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot contain path separators"));
        assert!(!shop.path().join("config.toml").exists());
    }

    #[test]
    fn edited_storage_key_stays_in_state_dir() {
        let shop = Shop::new();
        std::fs::write(
            shop.path().join("config.toml"),
            "[cart]\nstorage_key = \"../escaped\"\n",
        )
        .unwrap();

        shop.cmd().args(["add", "1"]).assert().success();

        assert!(shop.slot().exists());
        assert!(!shop.state_dir().join("escaped.json").exists());
    }
}
