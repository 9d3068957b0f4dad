use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow, bail};
use bronzecollapse_core::{
    AllianceOutcome, EventReport, ExchangeKind, FactionDefinition, GameOutcome, GameState,
    InvestmentKind, TurnReport, UnitKind,
};

pub fn choose_faction(definitions: &[FactionDefinition]) -> Result<String> {
    println!("青銅器文明の黄昏へようこそ。");
    println!("担当する勢力を選んでください:");
    for (idx, definition) in definitions.iter().enumerate() {
        println!(
            "{:>2}. {:<20} 人口 {:>6} | {}",
            idx + 1,
            definition.name,
            definition.resources.population,
            definition.description
        );
    }

    let stdin = io::stdin();
    loop {
        print!("勢力番号または名前> ");
        io::stdout()
            .flush()
            .context("プロンプトのフラッシュに失敗しました")?;

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .context("入力の読み込みに失敗しました")?;
        if bytes == 0 {
            bail!("入力が終了しました。");
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            if number >= 1 && number <= definitions.len() {
                return Ok(definitions[number - 1].name.clone());
            }
        } else if let Some(definition) = definitions
            .iter()
            .find(|definition| definition.name.eq_ignore_ascii_case(trimmed))
        {
            return Ok(definition.name.clone());
        }
        println!("勢力を特定できませんでした: {trimmed}");
    }
}

pub fn run(game: &mut GameState) -> Result<()> {
    print_intro(game);
    let stdin = io::stdin();

    loop {
        print!("ターン{}> ", game.turn());
        io::stdout()
            .flush()
            .context("プロンプトのフラッシュに失敗しました")?;

        let mut line = String::new();
        let bytes = stdin
            .lock()
            .read_line(&mut line)
            .context("入力の読み込みに失敗しました")?;

        if bytes == 0 {
            println!("入力が終了したためゲームを終了します。");
            return Ok(());
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match dispatch_command(game, trimmed) {
            Ok(true) => return Ok(()),
            Ok(false) => {}
            Err(error) => println!("エラー: {error}"),
        }
    }
}

// 戻り値 true はゲーム終了。
fn dispatch_command(game: &mut GameState, input: &str) -> Result<bool> {
    let mut parts = input.split_whitespace();
    let command = parts
        .next()
        .ok_or_else(|| anyhow!("コマンドが指定されていません。"))?
        .to_ascii_lowercase();

    match command.as_str() {
        "help" | "?" => {
            print_help();
            Ok(false)
        }
        "status" => {
            print_status(game);
            Ok(false)
        }
        "world" => {
            print_world(game);
            Ok(false)
        }
        "relations" => {
            print_relations(game);
            Ok(false)
        }
        "gift" => {
            let target = resolve_target(game, parts)?;
            let outcome = game.send_gift(target)?;
            println!(
                "{} に金{}を贈り、関係が {} 改善しました。",
                game.factions()[target].name,
                outcome.gold_spent,
                outcome.improvement
            );
            Ok(false)
        }
        "alliance" => {
            let target = resolve_target(game, parts)?;
            match game.propose_alliance(target)? {
                AllianceOutcome::Accepted { improvement } => println!(
                    "{} は同盟に応じました。関係 +{}。",
                    game.factions()[target].name,
                    improvement
                ),
                AllianceOutcome::Declined => println!(
                    "{} は今回は同盟を見送りました。",
                    game.factions()[target].name
                ),
            }
            Ok(false)
        }
        "threaten" => {
            let target = resolve_target(game, parts)?;
            let outcome = game.threaten(target)?;
            println!(
                "{} を威嚇しました。関係 {}。",
                game.factions()[target].name,
                outcome.change
            );
            Ok(false)
        }
        "aid" => {
            let target = resolve_target(game, parts)?;
            let outcome = game.request_aid(target)?;
            println!(
                "{} から食料 {} の援助を受けました。",
                game.factions()[target].name,
                outcome.food_granted
            );
            Ok(false)
        }
        "war" => {
            let target = resolve_target(game, parts)?;
            game.declare_war(target)?;
            println!("{} に宣戦布告しました。", game.factions()[target].name);
            Ok(false)
        }
        "route" => {
            let target = resolve_target(game, parts)?;
            let outcome = game.establish_trade_route(target)?;
            println!(
                "{} との交易路を開きました (費用 金{} / 収入 金{})。",
                game.factions()[target].name,
                outcome.gold_spent,
                outcome.gold_bonus
            );
            Ok(false)
        }
        "exchange" => {
            let kind_token = parts
                .next()
                .ok_or_else(|| anyhow!("交換の種類を指定してください。"))?;
            let kind = parse_exchange(kind_token)?;
            game.exchange(kind)?;
            println!("交換を実行しました: {}", kind.label());
            Ok(false)
        }
        "bronze" => {
            let forged = game.forge_bronze()?;
            if forged > 0 {
                println!("錫と銅から青銅 {forged} を鋳造しました。");
            } else {
                println!("鋳造に必要な錫と銅が揃っていません。");
            }
            Ok(false)
        }
        "recruit" => {
            let kind_token = parts
                .next()
                .ok_or_else(|| anyhow!("兵種を指定してください。"))?;
            let quantity = parts
                .next()
                .ok_or_else(|| anyhow!("募集数を指定してください。"))?
                .parse::<i32>()
                .context("募集数は整数で指定してください。")?;
            let kind = parse_unit(kind_token)?;
            let outcome = game.recruit(kind, quantity)?;
            println!(
                "{} を {} 募集しました (青銅{} / 金{})。",
                kind.label(),
                outcome.quantity,
                outcome.cost.bronze,
                outcome.cost.gold
            );
            Ok(false)
        }
        "raid" => {
            let target = resolve_target(game, parts)?;
            let outcome = game.raid(target)?;
            if outcome.victory {
                println!(
                    "{} への襲撃に成功。戦力 {} 対 {}。金{} 食料{} を略奪、損耗 歩兵{}。",
                    game.factions()[target].name,
                    outcome.attacker_strength,
                    outcome.defender_strength,
                    outcome.loot_gold,
                    outcome.loot_food,
                    outcome.attacker_losses
                );
            } else {
                println!(
                    "{} への襲撃は失敗。戦力 {} 対 {}。損耗 歩兵{}。",
                    game.factions()[target].name,
                    outcome.attacker_strength,
                    outcome.defender_strength,
                    outcome.attacker_losses
                );
            }
            Ok(false)
        }
        "invest" => {
            let kind_token = parts
                .next()
                .ok_or_else(|| anyhow!("投資の種類を指定してください。"))?;
            let kind = parse_investment(kind_token)?;
            let outcome = game.invest(kind)?;
            println!(
                "{} を実施しました (金{})。",
                outcome.kind.label(),
                outcome.gold_spent
            );
            Ok(false)
        }
        "export" => {
            let json = serde_json::to_string_pretty(&game.snapshots())
                .context("スナップショットの書き出しに失敗しました")?;
            println!("{json}");
            Ok(false)
        }
        "end" => {
            let report = game.end_turn()?;
            print_turn_report(game, &report);
            Ok(report.outcome.is_some())
        }
        "quit" | "exit" => {
            println!("ゲームを終了します。");
            Ok(true)
        }
        other => {
            bail!("未知のコマンドです: {other}. help で一覧を確認してください。");
        }
    }
}

fn print_intro(game: &GameState) {
    println!("あなたは {} を率います。", game.player().name);
    println!("コマンド例: status / world / gift 2 / recruit infantry 10 / end");
    println!("help で利用可能なコマンド一覧を表示します。");
}

fn print_help() {
    println!("利用可能なコマンド:");
    println!("  status                自勢力の資源・軍・威信を表示");
    println!("  world                 全勢力の一覧を表示");
    println!("  relations             各勢力との関係を表示");
    println!("  gift <相手>           金20を贈って関係を改善");
    println!("  alliance <相手>       同盟を提案 (関係25以上)");
    println!("  threaten <相手>       威嚇して関係を悪化させる");
    println!("  aid <相手>            食料援助を要請 (関係50以上)");
    println!("  war <相手>            宣戦布告");
    println!("  route <相手>          交易路を開設 (金10)");
    println!("  exchange <種類>       資源交換: food | bronze | tin | copper");
    println!("  bronze                錫と銅から青銅を鋳造");
    println!("  recruit <兵種> <数>   募集: infantry | chariots | archers | navy");
    println!("  raid <相手>           襲撃");
    println!("  invest <種類>         投資: agriculture | technology | festival");
    println!("  export                全勢力のスナップショットをJSONで出力");
    println!("  end                   ターンを終了する");
    println!("  quit                  ゲームを終了");
}

fn print_status(game: &GameState) {
    let player = game.player();
    println!("-- {} (ターン{}) --", player.name, game.turn());
    let r = &player.resources;
    println!(
        "食料 {} | 青銅 {} | 金 {} | 錫 {} | 銅 {} | 人口 {}",
        r.food, r.bronze, r.gold, r.tin, r.copper, r.population
    );
    let m = &player.military;
    println!(
        "歩兵 {} | 戦車 {} | 弓兵 {} | 海軍 {} | 総戦力 {}",
        m.infantry,
        m.chariots,
        m.archers,
        m.navy,
        player.total_strength()
    );
    println!(
        "威信 {} | 技術 {}",
        player.prestige, player.technology_level
    );
}

fn print_world(game: &GameState) {
    println!(
        "ID | {:<20} | {:>8} | {:>8} | {:>6} | 状態",
        "勢力", "人口", "総戦力", "威信"
    );
    for (idx, faction) in game.factions().iter().enumerate() {
        println!(
            "{:>2} | {:<20} | {:>8} | {:>8} | {:>6} | {}",
            idx + 1,
            faction.name,
            faction.resources.population,
            faction.total_strength(),
            faction.prestige,
            if faction.is_alive { "健在" } else { "滅亡" }
        );
    }
}

fn print_relations(game: &GameState) {
    let player = game.player();
    println!("{} から見た関係:", player.name);
    for faction in game.factions() {
        if faction.name == player.name {
            continue;
        }
        let value = player.relations.get(&faction.name);
        let status = player.relation_status_with(&faction.name);
        println!("  - {:<20}: {:>4} ({})", faction.name, value, status.label());
    }
}

fn print_turn_report(game: &GameState, report: &TurnReport) {
    println!("--- ターン{} の結果 ---", report.turn);
    let p = &report.production;
    println!(
        "生産: 食料+{} 金+{} 錫+{} 銅+{} / 青銅鋳造 {}",
        p.food, p.gold, p.tin, p.copper, report.bronze_forged
    );
    println!(
        "消費: 食料需要 {} + 軍維持 {}",
        report.consumption.food_needed, report.consumption.military_upkeep
    );
    if let Some(starvation) = &report.consumption.starvation {
        println!(
            "飢饉が発生: 不足 {} により {} 人が失われました。",
            starvation.shortfall, starvation.population_loss
        );
    }
    for summary in &report.ai_reports {
        if summary.recruited_infantry {
            println!("{} は歩兵を徴募しました。", summary.name);
        }
    }
    for name in &report.collapsed {
        println!("{name} は滅亡しました。");
    }
    if let Some(event) = &report.event {
        print_event(event);
    }
    if let Some(outcome) = &report.outcome {
        print_outcome(game, outcome);
    }
    println!("--------------------------");
}

fn print_event(event: &EventReport) {
    print!("イベント [{}]: ", event.kind().label());
    match event {
        EventReport::Drought { food_lost } => {
            println!("雨が降らず、食料 {food_lost} を失いました。");
        }
        EventReport::Earthquake {
            gold_lost,
            population_lost,
        } => {
            println!("都市が崩れ、金 {gold_lost} と人口 {population_lost} を失いました。");
        }
        EventReport::SeaPeoples {
            repelled,
            infantry_lost,
            gold_lost,
        } => {
            if *repelled {
                println!("艦隊が侵入者を撃退しました。威信 +10。");
            } else {
                println!("沿岸が荒らされ、歩兵 {infantry_lost} と金 {gold_lost} を失いました。");
            }
        }
        EventReport::Plague { population_lost } => {
            println!("疫病が広がり、人口 {population_lost} を失いました。");
        }
        EventReport::GoodHarvest { food_gained } => {
            println!("豊かな実りで食料 {food_gained} を得ました。");
        }
        EventReport::TradeOpportunity { gold_gained } => {
            println!("隊商が訪れ、金 {gold_gained} を得ました。");
        }
        EventReport::DiplomaticIncident { target, change } => {
            println!("{target} との間で事件が起き、関係が {change} 変化しました。");
        }
    }
}

fn print_outcome(game: &GameState, outcome: &GameOutcome) {
    match outcome {
        GameOutcome::Defeat => {
            println!("{} は歴史から姿を消しました。敗北です。", game.player().name);
        }
        GameOutcome::SoleSurvivor { score } => {
            println!(
                "崩壊の時代を生き残ったのは {} だけでした。勝利! スコア {}。",
                game.player().name,
                score
            );
        }
        GameOutcome::PrestigeVictory { score } => {
            println!(
                "{} の名声は全土に轟きました。威信による勝利! スコア {}。",
                game.player().name,
                score
            );
        }
    }
}

fn resolve_target<'a>(
    game: &GameState,
    parts: impl Iterator<Item = &'a str>,
) -> Result<usize> {
    let token = parts.collect::<Vec<_>>().join(" ");
    if token.is_empty() {
        bail!("相手の勢力を指定してください。");
    }
    game.find_faction_index(&token).ok_or_else(|| {
        anyhow!("勢力を特定できませんでした: {token} (番号か完全な名前を入力してください)")
    })
}

fn parse_exchange(token: &str) -> Result<ExchangeKind> {
    match token.to_ascii_lowercase().as_str() {
        "food" => Ok(ExchangeKind::FoodToGold),
        "bronze" => Ok(ExchangeKind::BronzeToGold),
        "tin" => Ok(ExchangeKind::GoldToTin),
        "copper" => Ok(ExchangeKind::GoldToCopper),
        other => bail!("未知の交換です: {other}"),
    }
}

fn parse_unit(token: &str) -> Result<UnitKind> {
    match token.to_ascii_lowercase().as_str() {
        "infantry" => Ok(UnitKind::Infantry),
        "chariots" | "chariot" => Ok(UnitKind::Chariots),
        "archers" | "archer" => Ok(UnitKind::Archers),
        "navy" => Ok(UnitKind::Navy),
        other => bail!("未知の兵種です: {other}"),
    }
}

fn parse_investment(token: &str) -> Result<InvestmentKind> {
    match token.to_ascii_lowercase().as_str() {
        "agriculture" | "agri" => Ok(InvestmentKind::Agriculture),
        "technology" | "tech" => Ok(InvestmentKind::Technology),
        "festival" => Ok(InvestmentKind::Festival),
        other => bail!("未知の投資です: {other}"),
    }
}
