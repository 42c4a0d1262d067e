use crate::error::{QueryError, Result};
use crate::render::{self, NO_HOUSES, NO_STATIONS};
use stationmap_relations::{RelationError, RelationIndex};

/// Outcome of one console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to print (may be empty)
    Text(String),

    /// End the session
    Exit,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }
}

type Handler = fn(&[&str], &RelationIndex) -> Result<Reply>;

/// Command name (upper case) → handler
const COMMANDS: &[(&str, Handler)] = &[
    ("SELECT", select),
    ("SHOW", show),
    ("STATTRACE", stat_trace),
    ("HOUSEREL", house_rel),
    ("HELP", help),
    ("EXIT", exit),
];

/// Stateless interpreter over a [`RelationIndex`]
pub struct QueryEngine<'a> {
    index: &'a RelationIndex,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a RelationIndex) -> Self {
        Self { index }
    }

    /// Names of every recognized command
    pub fn commands() -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|(name, _)| *name)
    }

    /// Run one command line.
    ///
    /// Matching is case-insensitive and surrounding whitespace is ignored.
    pub fn execute(&self, line: &str) -> Result<Reply> {
        let line = line.trim().to_ascii_uppercase();
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Err(QueryError::invalid("empty command"));
        };
        let args: Vec<&str> = tokens.collect();

        let handler = COMMANDS
            .iter()
            .find(|(command, _)| *command == name)
            .map(|(_, handler)| *handler)
            .ok_or_else(|| QueryError::invalid(format!("unknown command {name}")))?;

        log::debug!("Executing {name} with {args:?}");
        handler(&args, self.index)
    }

    /// Like [`Self::execute`], with invalid commands rendered as their diagnostic
    pub fn respond(&self, line: &str) -> Reply {
        match self.execute(line) {
            Ok(reply) => reply,
            Err(err) => {
                log::debug!("Rejected command {line:?}: {err:?}");
                Reply::Text(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    House,
    Station,
}

fn parse_table(token: Option<&&str>) -> Result<Table> {
    match token.copied() {
        Some("HOUSE") => Ok(Table::House),
        Some("STATION") => Ok(Table::Station),
        Some(other) => Err(QueryError::invalid(format!("unknown table {other}"))),
        None => Err(QueryError::invalid("missing table name")),
    }
}

fn parse_id(token: Option<&&str>) -> Result<usize> {
    let token = token.ok_or_else(|| QueryError::invalid("missing id"))?;
    // plain digits only; `usize::from_str` would also take a leading `+`
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(QueryError::invalid(format!("invalid id {token}")));
    }
    token
        .parse()
        .map_err(|_| QueryError::invalid(format!("invalid id {token}")))
}

fn expect_arity(args: &[&str], count: usize) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(QueryError::invalid(format!(
            "expected {count} arguments, got {}",
            args.len()
        )))
    }
}

fn select(args: &[&str], index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 2)?;
    let table = parse_table(args.first())?;
    let id = parse_id(args.get(1))?;
    let text = match table {
        Table::House => index
            .house(id)
            .map_or_else(|_| NO_HOUSES.to_string(), ToString::to_string),
        Table::Station => index
            .station(id)
            .map_or_else(|_| NO_STATIONS.to_string(), ToString::to_string),
    };
    Ok(Reply::Text(text))
}

fn show(args: &[&str], index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 1)?;
    let text = match parse_table(args.first())? {
        Table::House => render::lines(index.all_houses()),
        Table::Station => render::lines(index.all_stations()),
    };
    Ok(Reply::Text(text))
}

fn stat_trace(args: &[&str], index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 1)?;
    let id = parse_id(args.first())?;
    let Ok(station) = index.station(id) else {
        return Ok(Reply::text(NO_STATIONS));
    };
    let text = match index.houses_for_station(id) {
        Ok(traces) => render::station_trace(station, traces),
        Err(_) => NO_STATIONS.to_string(),
    };
    Ok(Reply::Text(text))
}

fn house_rel(args: &[&str], index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 1)?;
    if args[0] == "ALL" {
        let text = render::lines(
            index
                .all_houses()
                .map(|house| relation_line(index, house.id)),
        );
        return Ok(Reply::Text(text));
    }

    let id = parse_id(args.first())?;
    Ok(Reply::Text(relation_line(index, id)))
}

fn relation_line(index: &RelationIndex, house: usize) -> String {
    match index.station_for_house(house) {
        Ok(link) => render::house_relation(&link),
        Err(RelationError::Unassigned(_)) => match index.house(house) {
            Ok(house) => format!("{house} -> {NO_STATIONS}"),
            Err(_) => NO_HOUSES.to_string(),
        },
        Err(RelationError::HouseNotFound(_)) => NO_HOUSES.to_string(),
        Err(RelationError::StationNotFound(_)) => NO_STATIONS.to_string(),
    }
}

fn help(args: &[&str], _index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 0)?;
    Ok(Reply::text(render::HELP))
}

fn exit(args: &[&str], _index: &RelationIndex) -> Result<Reply> {
    expect_arity(args, 0)?;
    Ok(Reply::Exit)
}
