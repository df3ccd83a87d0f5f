//! Saved-variables text in the shapes the addon writes.

use auctionlord::domain::{Faction, Listing, UNKNOWN_SELLER};

/// An escaped item link as it appears inside the listings string.
pub fn link(id: u32, name: &str) -> String {
    format!(r#"\"|cffffffff|Hitem:{id}:0:0:0:0:0:0:0|h[{name}]|h|r\""#)
}

/// One listings-container entry. Ten numeric fields, then the seller.
pub fn rope(id: u32, name: &str, count: u32, buyout: u64, bid: u64, seller: &str) -> String {
    format!(
        "{{{},10,1,{count},0,{buyout},{bid},3,0,0,2,\\\"{seller}\\\"}}",
        link(id, name)
    )
}

/// A scan data file holding `entries` in its listings container.
pub fn scan_file(entries: &[String]) -> String {
    format!(
        concat!(
            "AucScanData = {{\n",
            "\t[\"Version\"] = 1,\n",
            "\t[\"scans\"] = {{\n",
            "\t\t[\"Stormrage\"] = {{\n",
            "\t\t\t[\"ropes\"] = {{\n",
            "\t\t\t\t\"return {{{}}}\",\n",
            "\t\t\t}},\n",
            "\t\t}},\n",
            "\t}},\n",
            "}}\n",
        ),
        entries.join(",")
    )
}

/// A line the fallback scan can read but the structural phase cannot:
/// no listings container, just a link followed by twelve numbers.
pub fn loose_line(id: u32, name: &str, bid: u64, buyout: u64) -> String {
    format!(
        "\"|cff1eff00|Hitem:{id}:0:0:0|h[{name}]|h|r\" 55 2 10 {bid} 0 0 4 0 0 3 0 {buyout}\n"
    )
}

pub fn histogram_file(records: &[(u32, u64, u32)]) -> String {
    let body: Vec<String> = records
        .iter()
        .map(|(id, price, seen)| format!("\t[\"{id}\"] = \"h!1;2;3!{price}!{seen}!\","))
        .collect();
    format!("AucAdvancedStatHistogramData = {{\n{}\n}}\n", body.join("\n"))
}

pub fn stddev_file(records: &[(u32, &[u64])]) -> String {
    let body: Vec<String> = records
        .iter()
        .map(|(id, samples)| {
            let samples: Vec<String> = samples.iter().map(u64::to_string).collect();
            format!("\t[{id}] = \"0:{}\",", samples.join(";"))
        })
        .collect();
    format!("AucAdvancedStatStdDevData = {{\n{}\n}}\n", body.join("\n"))
}

pub fn simple_file(records: &[(u32, u32, &str)]) -> String {
    let body: Vec<String> = records
        .iter()
        .map(|(id, seen, price)| format!("\t[\"{id}\"] = \"0@1;{seen};{price};0\","))
        .collect();
    format!("AucAdvancedStatSimpleData = {{\n{}\n}}\n", body.join("\n"))
}

pub fn listing(faction: Faction, id: u32, name: &str, buyout: u64) -> Listing {
    Listing {
        item_id: id,
        item_name: name.into(),
        level: 1,
        quality: 1,
        count: 1,
        buyout_price: buyout,
        bid_price: buyout / 2,
        time_left: 2,
        seller_name: format!("{faction}Seller"),
        scan_frequency: 1,
    }
}

pub fn unknown_seller_listing(id: u32, name: &str, buyout: u64) -> Listing {
    Listing {
        seller_name: UNKNOWN_SELLER.into(),
        ..listing(Faction::Horde, id, name, buyout)
    }
}
